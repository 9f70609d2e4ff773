use shiori_dictionary::Definition;
use shiori_journal::{Note, Session};
use shiori_types::{BookView, DefinitionView, JournalView, MeaningView, NoteView};

/// Snapshot the session for the book-list view.
pub fn journal_view(session: &mut Session) -> JournalView {
    let selected = session.selected().map(str::to_string);
    let books = session
        .journal()
        .books
        .iter()
        .map(|(title, book)| BookView {
            title: title.clone(),
            author: book.author.clone(),
            current_page: book.current_page,
            total_pages: book.total_pages,
            note_count: book.notes.len(),
        })
        .collect();

    JournalView { books, selected }
}

pub fn note_views(notes: Vec<&Note>) -> Vec<NoteView> {
    notes
        .into_iter()
        .map(|note| NoteView {
            text: note.text.clone(),
            timestamp: note.timestamp.clone(),
        })
        .collect()
}

pub fn definition_view(definition: Definition) -> DefinitionView {
    DefinitionView {
        word: definition.word,
        phonetic: definition.phonetic,
        meanings: definition
            .meanings
            .into_iter()
            .map(|meaning| MeaningView {
                part_of_speech: meaning.part_of_speech,
                definitions: meaning.definitions,
            })
            .collect(),
    }
}
