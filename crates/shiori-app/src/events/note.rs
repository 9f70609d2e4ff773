use kanal::AsyncSender;
use shiori_journal::Session;
use shiori_types::AppEvent;

use super::send_outcome;
use crate::view;

pub async fn handle_add(
    session: &mut Session,
    text: &str,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(title) = session.selected().map(str::to_string) else {
        tx.send(AppEvent::Warning(
            "Add a book to your journal first.".to_string(),
        ))
        .await?;
        return Ok(());
    };

    let result = session.add_note(&title, text);
    send_outcome(
        result,
        "Your note has been successfully saved!".to_string(),
        tx,
    )
    .await
}

pub async fn handle_list(session: &mut Session, tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let Some(title) = session.selected().map(str::to_string) else {
        tx.send(AppEvent::Warning(
            "Add a book to your journal first.".to_string(),
        ))
        .await?;
        return Ok(());
    };

    let notes = session
        .notes_newest_first(&title)
        .map(view::note_views)
        .unwrap_or_default();

    tx.send(AppEvent::ShowNotes { title, notes }).await?;
    Ok(())
}
