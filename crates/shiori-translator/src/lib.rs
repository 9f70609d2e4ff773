pub mod deepl;
pub mod language;

pub use deepl::DeepLTranslator;
pub use language::{Language, SUPPORTED_LANGUAGES, code_for, is_supported_code};

pub type LanguageCode = String;

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single word into the target language
    async fn translate(&self, word: &str, to: &str) -> Result<Translation, TranslateError>;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unsupported target language: {0}")]
    UnsupportedLanguage(String),

    #[error("authentication error")]
    Authentication,
}
