use crate::types::{self, Definition, WireEntry};

/// Client for the free dictionary API. One fresh GET per lookup, no caching.
#[derive(Clone)]
pub struct DictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Any non-success status from the API. The service answers unknown
    /// words with a 404, but every other status collapses here too.
    #[error("word not found")]
    NotFound,

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected response shape")]
    Malformed,
}

impl DictionaryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Look up an English word and return its first definition entry.
    pub async fn define(&self, word: &str) -> Result<Definition, LookupError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(LookupError::NotFound);
        }

        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), word);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::NotFound);
        }

        let entries: Vec<WireEntry> = response.json().await.map_err(|_| LookupError::Malformed)?;
        types::first_entry(entries).ok_or(LookupError::Malformed)
    }
}
