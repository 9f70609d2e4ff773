use crate::model::{Journal, JournalError, Note};
use crate::store::{JournalStore, StoreError};

/// The live editing session: the loaded journal, its backing store, and the
/// active-book selection. Each command validates and mutates a working copy,
/// persists it, then commits it to memory; a command that fails at any step
/// leaves both disk and memory as they were.
pub struct Session {
    store: JournalStore,
    journal: Journal,
    selected: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Journal(#[from] JournalError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl Session {
    /// Load the journal from the store and select the first book, if any.
    pub fn open(store: JournalStore) -> Result<Self, StoreError> {
        let journal = store.load()?;
        let selected = journal.first_title().map(str::to_string);

        Ok(Self {
            store,
            journal,
            selected,
        })
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The active book title. Falls back to the first available title if the
    /// previous selection no longer exists, or none for an empty journal.
    pub fn selected(&mut self) -> Option<&str> {
        let valid = self
            .selected
            .as_deref()
            .is_some_and(|title| self.journal.books.contains_key(title));
        if !valid {
            self.selected = self.journal.first_title().map(str::to_string);
        }
        self.selected.as_deref()
    }

    pub fn select(&mut self, title: &str) -> Result<(), JournalError> {
        if !self.journal.books.contains_key(title) {
            return Err(JournalError::UnknownTitle(title.to_string()));
        }
        self.selected = Some(title.to_string());
        Ok(())
    }

    /// Add a book and make it the active selection.
    pub fn add_book(&mut self, title: &str, author: &str) -> Result<(), SessionError> {
        let mut journal = self.journal.clone();
        journal.add_book(title, author)?;
        self.store.save(&journal)?;
        self.journal = journal;
        self.selected = Some(title.trim().to_string());
        Ok(())
    }

    pub fn set_progress(
        &mut self,
        title: &str,
        current_page: u32,
        total_pages: u32,
    ) -> Result<(), SessionError> {
        let mut journal = self.journal.clone();
        journal.set_progress(title, current_page, total_pages)?;
        self.store.save(&journal)?;
        self.journal = journal;
        Ok(())
    }

    pub fn add_note(&mut self, title: &str, text: &str) -> Result<(), SessionError> {
        let mut journal = self.journal.clone();
        journal.add_note(title, text)?;
        self.store.save(&journal)?;
        self.journal = journal;
        Ok(())
    }

    pub fn notes_newest_first(&self, title: &str) -> Result<Vec<&Note>, JournalError> {
        self.journal.notes_newest_first(title)
    }
}
