use std::fmt::Write;

use shiori_translator::SUPPORTED_LANGUAGES;
use shiori_types::{AppEvent, DefinitionView, JournalView, NoteView};

const NOT_AVAILABLE: &str = "not available";

/// Render one view event to text. Pure function of the event.
pub fn render(event: &AppEvent) -> String {
    match event {
        AppEvent::ShowJournal(view) => render_journal(view),
        AppEvent::ShowNotes { title, notes } => render_notes(title, notes),
        AppEvent::ShowDefinition(view) => render_definition(view),
        AppEvent::ShowTranslation {
            word,
            language,
            text,
        } => format!("\"{word}\" in {language}: {text}"),
        AppEvent::Notice(message) => message.clone(),
        AppEvent::Warning(message) => format!("! {message}"),
        _ => String::new(),
    }
}

fn render_journal(view: &JournalView) -> String {
    if view.books.is_empty() {
        return "Your journal is empty. Add a book with: add <title> / <author>".to_string();
    }

    let mut out = String::from("Your books:\n");
    for book in &view.books {
        let marker = if view.selected.as_deref() == Some(book.title.as_str()) {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "{marker} {} by {}: {} of {} pages ({}%), {} note(s)",
            book.title,
            book.author,
            book.current_page,
            book.total_pages,
            book.percent_read(),
            book.note_count,
        );
    }
    out.push_str("The selected book is marked with *.");
    out
}

fn render_notes(title: &str, notes: &[NoteView]) -> String {
    if notes.is_empty() {
        return format!("No notes for \"{title}\" yet.");
    }

    let mut out = format!("Notes for \"{title}\" (most recent first):\n");
    for note in notes {
        let _ = writeln!(out, "- {}\n  Saved on: {}", note.text, note.timestamp);
    }
    out.pop();
    out
}

fn render_definition(view: &DefinitionView) -> String {
    let mut out = format!("Word: {}\n", view.word);
    let _ = writeln!(
        out,
        "Phonetic: {}",
        view.phonetic.as_deref().unwrap_or(NOT_AVAILABLE)
    );

    for meaning in &view.meanings {
        let _ = writeln!(out, "\nPart of speech: {}", meaning.part_of_speech);
        for (i, definition) in meaning.definitions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {definition}", i + 1);
        }
    }
    out.pop();
    out
}

pub fn banner() -> String {
    "Welcome to your personal reading journal. Type \"help\" for commands.".to_string()
}

pub fn help() -> String {
    "Commands:\n\
     \x20 add <title> / <author>           add a book to the journal\n\
     \x20 books                            list your books\n\
     \x20 select <title>                   switch the active book\n\
     \x20 progress <current> <total>       update reading progress\n\
     \x20 note <text>                      add a note to the active book\n\
     \x20 notes                            show notes, most recent first\n\
     \x20 define <word>                    look up an English word\n\
     \x20 translate <word> [language]      translate a word\n\
     \x20 languages                        list translation targets\n\
     \x20 quit                             save is automatic; just leave"
        .to_string()
}

pub fn languages() -> String {
    let mut out = String::from("Supported translation targets:\n");
    for lang in SUPPORTED_LANGUAGES {
        let _ = writeln!(out, "  {} ({})", lang.name, lang.code);
    }
    out.pop();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiori_types::{BookView, MeaningView};

    #[test]
    fn journal_render_marks_the_selection() {
        let view = JournalView {
            books: vec![
                BookView {
                    title: "Dune".into(),
                    author: "Herbert".into(),
                    current_page: 55,
                    total_pages: 412,
                    note_count: 1,
                },
                BookView {
                    title: "Hyperion".into(),
                    author: "Simmons".into(),
                    current_page: 0,
                    total_pages: 100,
                    note_count: 0,
                },
            ],
            selected: Some("Dune".into()),
        };

        let text = render(&AppEvent::ShowJournal(view));
        assert!(text.contains("* Dune by Herbert: 55 of 412 pages (13%), 1 note(s)"));
        assert!(text.contains("  Hyperion"));
    }

    #[test]
    fn empty_journal_renders_a_hint() {
        let view = JournalView {
            books: vec![],
            selected: None,
        };
        assert!(render(&AppEvent::ShowJournal(view)).contains("journal is empty"));
    }

    #[test]
    fn definition_render_substitutes_missing_phonetic() {
        let view = DefinitionView {
            word: "mumble".into(),
            phonetic: None,
            meanings: vec![MeaningView {
                part_of_speech: "verb".into(),
                definitions: vec!["To speak unintelligibly.".into()],
            }],
        };

        let text = render(&AppEvent::ShowDefinition(view));
        assert!(text.contains("Phonetic: not available"));
        assert!(text.contains("Part of speech: verb"));
        assert!(text.contains("1. To speak unintelligibly."));
    }

    #[test]
    fn warnings_are_visually_distinct() {
        assert_eq!(render(&AppEvent::Warning("nope".into())), "! nope");
        assert_eq!(render(&AppEvent::Notice("done".into())), "done");
    }
}
