use std::io::Write;

use kanal::{AsyncReceiver, AsyncSender};
use shiori_types::AppEvent;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

/// What a parsed input line asks for: a command for the backend, a local
/// presentation action, or nothing.
#[derive(Debug)]
pub enum UiAction {
    Send(AppEvent),
    Help,
    Languages,
    Quit,
    Nothing,
}

/// Line-oriented presentation loop. Sends one command at a time and waits
/// for its reply before prompting again.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    println!("{}", render::banner());

    // Open on the book list.
    ui_to_app_tx.send(AppEvent::ListBooks).await?;
    match app_to_ui_rx.recv().await {
        Ok(reply) => println!("{}", render::render(&reply)),
        Err(_) => return Ok(()),
    }

    loop {
        print!("> ");
        stdout.flush()?;

        let Some(line) = lines.next_line().await? else {
            // stdin closed
            let _ = ui_to_app_tx.send(AppEvent::Quit).await;
            break;
        };

        match parse_command(&line) {
            Ok(UiAction::Nothing) => {}
            Ok(UiAction::Help) => println!("{}", render::help()),
            Ok(UiAction::Languages) => println!("{}", render::languages()),
            Ok(UiAction::Quit) => {
                let _ = ui_to_app_tx.send(AppEvent::Quit).await;
                break;
            }
            Ok(UiAction::Send(event)) => {
                ui_to_app_tx.send(event).await?;
                match app_to_ui_rx.recv().await {
                    Ok(reply) => println!("{}", render::render(&reply)),
                    Err(_) => break,
                }
            }
            Err(message) => println!("{message}"),
        }
    }

    Ok(())
}

/// Parse one input line into a UI action. Pure, so the grammar is testable.
pub fn parse_command(line: &str) -> Result<UiAction, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(UiAction::Nothing);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "help" => Ok(UiAction::Help),
        "languages" => Ok(UiAction::Languages),
        "quit" | "exit" => Ok(UiAction::Quit),
        "books" => Ok(UiAction::Send(AppEvent::ListBooks)),
        "notes" => Ok(UiAction::Send(AppEvent::ListNotes)),
        "add" => {
            let Some((title, author)) = rest.split_once('/') else {
                return Err("usage: add <title> / <author>".to_string());
            };
            Ok(UiAction::Send(AppEvent::AddBook {
                title: title.trim().to_string(),
                author: author.trim().to_string(),
            }))
        }
        "select" => {
            if rest.is_empty() {
                return Err("usage: select <title>".to_string());
            }
            Ok(UiAction::Send(AppEvent::SelectBook(rest.to_string())))
        }
        "progress" => {
            let mut parts = rest.split_whitespace();
            let pages = (parts.next(), parts.next(), parts.next());
            let (Some(current), Some(total), None) = pages else {
                return Err("usage: progress <current page> <total pages>".to_string());
            };
            match (current.parse(), total.parse()) {
                (Ok(current_page), Ok(total_pages)) => Ok(UiAction::Send(AppEvent::SetProgress {
                    current_page,
                    total_pages,
                })),
                _ => Err("page counts must be whole numbers".to_string()),
            }
        }
        "note" => {
            Ok(UiAction::Send(AppEvent::AddNote(rest.to_string())))
        }
        "define" => {
            let mut parts = rest.split_whitespace();
            let (Some(word), None) = (parts.next(), parts.next()) else {
                return Err("usage: define <word>".to_string());
            };
            Ok(UiAction::Send(AppEvent::LookupWord(word.to_string())))
        }
        "translate" => {
            let Some(word) = rest.split_whitespace().next() else {
                return Err("usage: translate <word> [language]".to_string());
            };
            let language = rest[word.len()..].trim().to_string();
            Ok(UiAction::Send(AppEvent::TranslateWord {
                word: word.to_string(),
                language,
            }))
        }
        _ => Err(format!("unknown command \"{command}\" (try \"help\")")),
    }
}
