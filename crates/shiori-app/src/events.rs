use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use shiori_dictionary::DictionaryClient;
use shiori_journal::{Session, SessionError};
use shiori_translator::DeepLTranslator;
use shiori_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod book;
pub mod lookup;
pub mod note;
pub mod progress;
pub mod translate;

/// Backend loop: owns the session, dispatches one command at a time, and
/// answers each with a single view event.
pub async fn event_loop(
    state: Arc<AppState>,
    mut session: Session,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let (dictionary, translator) = {
        let config = state.config.read().await;
        let dictionary = DictionaryClient::new(config.dictionary.api_url.clone());
        let translator = if config.translator.enabled && !config.translator.api_key.is_empty() {
            Some(DeepLTranslator::new(
                config.translator.api_key.clone(),
                config.translator.api_url.clone(),
            ))
        } else {
            tracing::warn!("translator disabled: no API key configured");
            None
        };
        (dictionary, translator)
    };

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
        };

        if matches!(event, AppEvent::Quit) {
            tracing::info!("quit requested");
            break;
        }

        handle_event(
            state.clone(),
            &mut session,
            &dictionary,
            translator.as_ref(),
            &app_to_ui_tx,
            event,
        )
        .await?;
    }

    Ok(())
}

async fn handle_event(
    state: Arc<AppState>,
    session: &mut Session,
    dictionary: &DictionaryClient,
    translator: Option<&DeepLTranslator>,
    tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::AddBook { title, author } => {
            book::handle_add(session, &title, &author, tx).await?;
        }
        AppEvent::SelectBook(title) => {
            book::handle_select(session, &title, tx).await?;
        }
        AppEvent::ListBooks => {
            book::handle_list(session, tx).await?;
        }
        AppEvent::SetProgress {
            current_page,
            total_pages,
        } => {
            progress::handle_set(session, current_page, total_pages, tx).await?;
        }
        AppEvent::AddNote(text) => {
            note::handle_add(session, &text, tx).await?;
        }
        AppEvent::ListNotes => {
            note::handle_list(session, tx).await?;
        }
        AppEvent::LookupWord(word) => {
            lookup::handle_lookup(dictionary, &word, tx).await?;
        }
        AppEvent::TranslateWord { word, language } => {
            translate::handle_translate(state, translator, &word, &language, tx).await?;
        }
        // View events never arrive on this side of the channel pair.
        AppEvent::Quit
        | AppEvent::ShowJournal(_)
        | AppEvent::ShowNotes { .. }
        | AppEvent::ShowDefinition(_)
        | AppEvent::ShowTranslation { .. }
        | AppEvent::Notice(_)
        | AppEvent::Warning(_) => {}
    }

    Ok(())
}

/// Shared reply shape for the mutating commands: success notice, validation
/// warning, or a persistence failure.
pub(crate) async fn send_outcome(
    result: Result<(), SessionError>,
    success: String,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => {
            tx.send(AppEvent::Notice(success)).await?;
        }
        Err(SessionError::Journal(e)) => {
            tracing::warn!("rejected: {e}");
            tx.send(AppEvent::Warning(e.to_string())).await?;
        }
        Err(SessionError::Store(e)) => {
            tracing::error!("failed to persist journal: {e}");
            tx.send(AppEvent::Warning(
                "Could not save your journal to disk.".to_string(),
            ))
            .await?;
        }
    }

    Ok(())
}
