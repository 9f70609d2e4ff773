use shiori_types::AppEvent;

use crate::ui::{UiAction, parse_command};

fn event(line: &str) -> AppEvent {
    match parse_command(line) {
        Ok(UiAction::Send(event)) => event,
        other => panic!("expected a command event, got {other:?}"),
    }
}

#[test]
fn add_splits_title_and_author_on_slash() {
    match event("add A Canticle for Leibowitz / Walter M. Miller Jr.") {
        AppEvent::AddBook { title, author } => {
            assert_eq!(title, "A Canticle for Leibowitz");
            assert_eq!(author, "Walter M. Miller Jr.");
        }
        other => panic!("wrong event: {other:?}"),
    }
}

#[test]
fn add_without_a_slash_is_a_usage_error() {
    assert!(parse_command("add Dune").is_err());
}

#[test]
fn progress_takes_exactly_two_numbers() {
    match event("progress 55 412") {
        AppEvent::SetProgress {
            current_page,
            total_pages,
        } => {
            assert_eq!(current_page, 55);
            assert_eq!(total_pages, 412);
        }
        other => panic!("wrong event: {other:?}"),
    }

    assert!(parse_command("progress 55").is_err());
    assert!(parse_command("progress 55 412 7").is_err());
    assert!(parse_command("progress fifty 412").is_err());
}

#[test]
fn note_keeps_the_rest_of_the_line_verbatim() {
    match event("note Great worldbuilding, slow start") {
        AppEvent::AddNote(text) => assert_eq!(text, "Great worldbuilding, slow start"),
        other => panic!("wrong event: {other:?}"),
    }
}

#[test]
fn define_takes_a_single_word() {
    match event("define serendipity") {
        AppEvent::LookupWord(word) => assert_eq!(word, "serendipity"),
        other => panic!("wrong event: {other:?}"),
    }
    assert!(parse_command("define two words").is_err());
    assert!(parse_command("define").is_err());
}

#[test]
fn translate_language_is_the_rest_of_the_line() {
    match event("translate hello chinese (simplified)") {
        AppEvent::TranslateWord { word, language } => {
            assert_eq!(word, "hello");
            assert_eq!(language, "chinese (simplified)");
        }
        other => panic!("wrong event: {other:?}"),
    }

    match event("translate hello") {
        AppEvent::TranslateWord { word, language } => {
            assert_eq!(word, "hello");
            assert!(language.is_empty());
        }
        other => panic!("wrong event: {other:?}"),
    }
}

#[test]
fn cli_flags_parse() {
    use clap::Parser;

    let args = crate::Args::try_parse_from([
        "shiori",
        "--data-file",
        "books.json",
        "--log-filter",
        "debug",
    ])
    .unwrap();
    assert_eq!(
        args.data_file.as_deref(),
        Some(std::path::Path::new("books.json"))
    );
    assert_eq!(args.log_filter.as_deref(), Some("debug"));

    let args = crate::Args::try_parse_from(["shiori"]).unwrap();
    assert!(args.data_file.is_none());
    assert!(args.log_filter.is_none());
}

#[test]
fn local_actions_and_blanks() {
    assert!(matches!(parse_command(""), Ok(UiAction::Nothing)));
    assert!(matches!(parse_command("  "), Ok(UiAction::Nothing)));
    assert!(matches!(parse_command("help"), Ok(UiAction::Help)));
    assert!(matches!(parse_command("languages"), Ok(UiAction::Languages)));
    assert!(matches!(parse_command("quit"), Ok(UiAction::Quit)));
    assert!(matches!(parse_command("exit"), Ok(UiAction::Quit)));
    assert!(parse_command("frobnicate").is_err());
}
