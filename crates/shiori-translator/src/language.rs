/// A selectable target language: human-readable name plus ISO-like code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    pub code: &'static str,
}

/// The fixed set offered to the user. Any ISO-like set would do; this one
/// mirrors what the translation provider accepts.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { name: "hindi", code: "hi" },
    Language { name: "spanish", code: "es" },
    Language { name: "french", code: "fr" },
    Language { name: "german", code: "de" },
    Language { name: "japanese", code: "ja" },
    Language { name: "russian", code: "ru" },
    Language { name: "chinese (simplified)", code: "zh" },
];

/// Resolve a user-supplied language name or code to a supported code,
/// case-insensitively.
pub fn code_for(name_or_code: &str) -> Option<&'static str> {
    let wanted = name_or_code.trim().to_lowercase();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.name == wanted || lang.code == wanted)
        .map(|lang| lang.code)
}

pub fn is_supported_code(code: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|lang| lang.code == code)
}
