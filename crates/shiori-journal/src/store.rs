use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Journal;

/// Whole-document JSON persistence for the journal.
///
/// Every save rewrites the full document; there is no incremental log. The
/// file is not locked against other processes.
pub struct JournalStore {
    path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("journal io error")]
    Io(#[from] std::io::Error),

    #[error("journal file is not valid JSON")]
    Parse(#[from] serde_json::Error),
}

impl JournalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the journal from disk. A missing file is a fresh start and
    /// yields an empty journal; an unreadable or corrupt file is an error.
    pub fn load(&self) -> Result<Journal, StoreError> {
        if !self.path.exists() {
            return Ok(Journal::default());
        }

        let data = fs::read_to_string(&self.path)?;
        let journal = serde_json::from_str(&data)?;
        Ok(journal)
    }

    /// Serialize the whole journal and swap it into place via a temp file
    /// in the same directory, so a crash mid-write cannot corrupt the
    /// previous document.
    pub fn save(&self, journal: &Journal) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(journal)?;

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> JournalStore {
        JournalStore::new(dir.path().join("journal_data.json"))
    }

    #[test]
    fn missing_file_loads_empty_journal() {
        let dir = tempfile::tempdir().unwrap();
        let journal = store_in(&dir).load().unwrap();
        assert!(journal.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();
        journal.set_progress("Dune", 55, 412).unwrap();
        journal
            .add_note_at("Dune", "Great worldbuilding", "March 04, 2025 at 03:15 PM".into())
            .unwrap();
        journal.add_book("Hyperion", "Simmons").unwrap();

        store.save(&journal).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, journal);
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Parse(_))));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&Journal::default()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["journal_data.json"]);
    }

    #[test]
    fn wire_format_matches_the_stored_document_shape() {
        let data = r#"{
            "books": {
                "Dune": {
                    "author": "Herbert",
                    "current_page": 55,
                    "total_pages": 412,
                    "notes": [ { "text": "Great worldbuilding", "ts": "March 04, 2025 at 03:15 PM" } ]
                }
            }
        }"#;

        let journal: Journal = serde_json::from_str(data).unwrap();
        let book = journal.get("Dune").unwrap();
        assert_eq!(book.notes[0].timestamp, "March 04, 2025 at 03:15 PM");

        // The `ts` key survives re-serialization.
        let out = serde_json::to_string(&journal).unwrap();
        assert!(out.contains("\"ts\""));
    }
}
