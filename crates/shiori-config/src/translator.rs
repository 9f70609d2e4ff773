use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://api-free.deepl.com/v2/translate".to_string()
}

fn default_target_lang() -> String {
    "hi".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Empty key leaves translation unavailable at runtime
    #[serde(default)]
    pub api_key: String,
    /// Target language used when the user does not name one
    #[serde(default = "default_target_lang")]
    pub default_target: String,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_url = env::var("SHIORI_TRANSLATE_URL").unwrap_or_else(|_| default_api_url());
        let api_key = env::var("SHIORI_TRANSLATE_KEY").unwrap_or_default();

        Self {
            enabled: default_enabled(),
            api_url,
            api_key,
            default_target: default_target_lang(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            default_target: default_target_lang(),
        }
    }
}
