use async_trait::async_trait;

use crate::language::is_supported_code;
use crate::{TranslateError, Translation, Translator};

/// DeepL-compatible HTTP translator. The source language is left to the
/// service's auto-detection; only the target is sent.
#[derive(Clone)]
pub struct DeepLTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLTranslator {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl Translator for DeepLTranslator {
    async fn translate(&self, word: &str, to: &str) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::Authentication);
        }
        if !is_supported_code(to) {
            return Err(TranslateError::UnsupportedLanguage(to.to_string()));
        }

        let params = [("text", word), ("target_lang", &to.to_uppercase())];

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        if response.status() == 403 {
            return Err(TranslateError::Authentication);
        }

        if !response.status().is_success() {
            return Err(TranslateError::Api(format!("HTTP {}", response.status())));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslateError::Api(format!("failed to parse response: {e}")))?;

        let text = translated_text(&json)
            .ok_or_else(|| TranslateError::Api("no translation in response".to_string()))?;

        Ok(Translation {
            text: text.to_string(),
            to: to.to_string(),
            provider: "deepl".to_string(),
        })
    }
}

fn translated_text(json: &serde_json::Value) -> Option<&str> {
    json["translations"].get(0).and_then(|t| t["text"].as_str())
}
