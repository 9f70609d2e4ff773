use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_file() -> PathBuf {
    PathBuf::from("journal_data.json")
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the journal document on disk
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_file = env::var("SHIORI_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_file());

        Self { data_file }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}
