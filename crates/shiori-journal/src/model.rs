use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Page count assigned to a freshly added book until the user corrects it.
pub const DEFAULT_TOTAL_PAGES: u32 = 100;

const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M %p";

/// The full persisted collection of books.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub books: BTreeMap<String, Book>,
}

/// One tracked reading item with author, page progress, and notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub author: String,
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// A single timestamped free-text entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub text: String,
    #[serde(rename = "ts")]
    pub timestamp: String,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum JournalError {
    #[error("\"{0}\" is already in the journal")]
    DuplicateTitle(String),

    #[error("no book titled \"{0}\"")]
    UnknownTitle(String),

    #[error("a book needs both a title and an author")]
    MissingField,

    #[error("a note needs some text before it can be saved")]
    EmptyNote,

    #[error("total pages must be at least 1")]
    ZeroTotalPages,
}

impl Book {
    fn new(author: String) -> Self {
        Self {
            author,
            current_page: 0,
            total_pages: DEFAULT_TOTAL_PAGES,
            notes: Vec::new(),
        }
    }

    /// Fraction of the book read. `total_pages >= 1` makes this total.
    pub fn progress(&self) -> f64 {
        f64::from(self.current_page) / f64::from(self.total_pages)
    }
}

impl Journal {
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Book> {
        self.books.get(title)
    }

    /// First title in iteration order, used as the selection fallback.
    pub fn first_title(&self) -> Option<&str> {
        self.books.keys().next().map(String::as_str)
    }

    /// Insert a new book with zero progress and the default page count.
    pub fn add_book(&mut self, title: &str, author: &str) -> Result<(), JournalError> {
        let title = title.trim();
        let author = author.trim();
        if title.is_empty() || author.is_empty() {
            return Err(JournalError::MissingField);
        }
        if self.books.contains_key(title) {
            return Err(JournalError::DuplicateTitle(title.to_string()));
        }

        self.books
            .insert(title.to_string(), Book::new(author.to_string()));
        Ok(())
    }

    /// Update both page counters in place. `current_page` may exceed
    /// `total_pages`; the user is allowed to over-read.
    pub fn set_progress(
        &mut self,
        title: &str,
        current_page: u32,
        total_pages: u32,
    ) -> Result<(), JournalError> {
        if total_pages == 0 {
            return Err(JournalError::ZeroTotalPages);
        }
        let book = self
            .books
            .get_mut(title)
            .ok_or_else(|| JournalError::UnknownTitle(title.to_string()))?;

        book.current_page = current_page;
        book.total_pages = total_pages;
        Ok(())
    }

    /// Append a note stamped with the current local wall-clock time.
    pub fn add_note(&mut self, title: &str, text: &str) -> Result<(), JournalError> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.add_note_at(title, text, timestamp)
    }

    pub fn add_note_at(
        &mut self,
        title: &str,
        text: &str,
        timestamp: String,
    ) -> Result<(), JournalError> {
        if text.trim().is_empty() {
            return Err(JournalError::EmptyNote);
        }
        let book = self
            .books
            .get_mut(title)
            .ok_or_else(|| JournalError::UnknownTitle(title.to_string()))?;

        book.notes.push(Note {
            text: text.to_string(),
            timestamp,
        });
        Ok(())
    }

    /// Notes for display, most recent first. Derived view; storage order
    /// stays chronological.
    pub fn notes_newest_first(&self, title: &str) -> Result<Vec<&Note>, JournalError> {
        let book = self
            .books
            .get(title)
            .ok_or_else(|| JournalError::UnknownTitle(title.to_string()))?;

        Ok(book.notes.iter().rev().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_book_uses_defaults() {
        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();

        let book = journal.get("Dune").unwrap();
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.current_page, 0);
        assert_eq!(book.total_pages, DEFAULT_TOTAL_PAGES);
        assert!(book.notes.is_empty());
    }

    #[test]
    fn duplicate_title_leaves_journal_unchanged() {
        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();
        journal.set_progress("Dune", 10, 412).unwrap();

        let before = journal.clone();
        let err = journal.add_book("Dune", "Someone Else").unwrap_err();
        assert_eq!(err, JournalError::DuplicateTitle("Dune".to_string()));
        assert_eq!(journal, before);
    }

    #[test]
    fn missing_title_or_author_is_rejected() {
        let mut journal = Journal::default();
        assert_eq!(
            journal.add_book("  ", "Herbert").unwrap_err(),
            JournalError::MissingField
        );
        assert_eq!(
            journal.add_book("Dune", "").unwrap_err(),
            JournalError::MissingField
        );
        assert!(journal.is_empty());
    }

    #[test]
    fn set_progress_updates_both_fields() {
        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();
        journal.set_progress("Dune", 55, 412).unwrap();

        let book = journal.get("Dune").unwrap();
        assert_eq!(book.current_page, 55);
        assert_eq!(book.total_pages, 412);
        assert_eq!((book.progress() * 100.0).round() as u32, 13);
    }

    #[test]
    fn set_progress_rejects_zero_total() {
        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();

        let err = journal.set_progress("Dune", 5, 0).unwrap_err();
        assert_eq!(err, JournalError::ZeroTotalPages);
        assert_eq!(journal.get("Dune").unwrap().total_pages, DEFAULT_TOTAL_PAGES);
    }

    #[test]
    fn current_page_may_exceed_total() {
        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();
        journal.set_progress("Dune", 500, 412).unwrap();
        assert_eq!(journal.get("Dune").unwrap().current_page, 500);
    }

    #[test]
    fn empty_note_is_rejected() {
        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();

        let err = journal.add_note("Dune", "   ").unwrap_err();
        assert_eq!(err, JournalError::EmptyNote);
        assert!(journal.get("Dune").unwrap().notes.is_empty());
    }

    #[test]
    fn add_note_appends_with_timestamp() {
        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();
        journal.add_note("Dune", "Great worldbuilding").unwrap();

        let notes = &journal.get("Dune").unwrap().notes;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].text, "Great worldbuilding");
        assert!(!notes[0].timestamp.is_empty());
    }

    #[test]
    fn notes_view_is_reverse_chronological() {
        let mut journal = Journal::default();
        journal.add_book("Dune", "Herbert").unwrap();
        journal
            .add_note_at("Dune", "first", "March 01, 2025 at 09:00 AM".into())
            .unwrap();
        journal
            .add_note_at("Dune", "second", "March 02, 2025 at 09:00 AM".into())
            .unwrap();

        let view = journal.notes_newest_first("Dune").unwrap();
        assert_eq!(view[0].text, "second");
        assert_eq!(view[1].text, "first");

        // Stored order stays chronological.
        assert_eq!(journal.get("Dune").unwrap().notes[0].text, "first");
    }

    #[test]
    fn unknown_title_is_an_error() {
        let mut journal = Journal::default();
        assert_eq!(
            journal.add_note("Dune", "text").unwrap_err(),
            JournalError::UnknownTitle("Dune".to_string())
        );
        assert_eq!(
            journal.set_progress("Dune", 1, 2).unwrap_err(),
            JournalError::UnknownTitle("Dune".to_string())
        );
    }
}
