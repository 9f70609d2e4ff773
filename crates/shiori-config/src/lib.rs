use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::storage::StorageConfig;
use self::translator::TranslatorConfig;

pub mod dictionary;
pub mod storage;
pub mod translator;

#[derive(Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub dictionary: DictionaryConfig,
    pub translator: TranslatorConfig,
}

impl Config {
    /// Build a config from defaults plus environment overrides.
    pub fn new() -> Self {
        Config {
            storage: StorageConfig::new(),
            dictionary: DictionaryConfig::new(),
            translator: TranslatorConfig::new(),
        }
    }
}
