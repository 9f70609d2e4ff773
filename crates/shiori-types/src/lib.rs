use serde::{Deserialize, Serialize};

/// Events exchanged between the presentation loop and the backend.
///
/// Commands flow from the UI to the event loop; every command is answered
/// with exactly one view event flowing back.
#[derive(Debug, Clone)]
pub enum AppEvent {
    AddBook { title: String, author: String },
    SelectBook(String),
    SetProgress { current_page: u32, total_pages: u32 },
    AddNote(String),
    ListBooks,
    ListNotes,
    LookupWord(String),
    TranslateWord { word: String, language: String },
    Quit,

    ShowJournal(JournalView),
    ShowNotes { title: String, notes: Vec<NoteView> },
    ShowDefinition(DefinitionView),
    ShowTranslation { word: String, language: String, text: String },
    Notice(String),
    Warning(String),
}

/// Snapshot of the journal for rendering the book list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalView {
    pub books: Vec<BookView>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookView {
    pub title: String,
    pub author: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub note_count: usize,
}

impl BookView {
    /// Pages read as a percentage, rounded down.
    pub fn percent_read(&self) -> u32 {
        self.current_page.saturating_mul(100) / self.total_pages.max(1)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteView {
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefinitionView {
    pub word: String,
    pub phonetic: Option<String>,
    pub meanings: Vec<MeaningView>,
}

/// One part-of-speech group with its ordered definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeaningView {
    pub part_of_speech: String,
    pub definitions: Vec<String>,
}
