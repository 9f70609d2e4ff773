use serde::Deserialize;

/// Placeholder shown when the API omits an optional field.
pub const NOT_AVAILABLE: &str = "not available";

const NO_DEFINITION: &str = "No definition available.";

/// Parsed definition listing for a single word.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub word: String,
    pub phonetic: Option<String>,
    pub meanings: Vec<Meaning>,
}

/// One part-of-speech group with its definitions, in API order.
#[derive(Debug, Clone, PartialEq)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<String>,
}

// Wire shape of api.dictionaryapi.dev: an array of entries, of which only
// the first is used.

#[derive(Deserialize)]
pub(crate) struct WireEntry {
    word: Option<String>,
    phonetic: Option<String>,
    #[serde(default)]
    meanings: Vec<WireMeaning>,
}

#[derive(Deserialize)]
struct WireMeaning {
    #[serde(rename = "partOfSpeech")]
    part_of_speech: Option<String>,
    #[serde(default)]
    definitions: Vec<WireDefinition>,
}

#[derive(Deserialize)]
struct WireDefinition {
    definition: Option<String>,
}

/// Take the first entry of the response array, substituting placeholders
/// for whatever optional fields the API left out.
pub(crate) fn first_entry(entries: Vec<WireEntry>) -> Option<Definition> {
    let entry = entries.into_iter().next()?;

    let meanings = entry
        .meanings
        .into_iter()
        .map(|meaning| Meaning {
            part_of_speech: meaning
                .part_of_speech
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            definitions: meaning
                .definitions
                .into_iter()
                .map(|d| d.definition.unwrap_or_else(|| NO_DEFINITION.to_string()))
                .collect(),
        })
        .collect();

    Some(Definition {
        word: entry.word.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        phonetic: entry.phonetic,
        meanings,
    })
}
