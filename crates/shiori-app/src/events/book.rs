use kanal::AsyncSender;
use shiori_journal::Session;
use shiori_types::AppEvent;

use super::send_outcome;
use crate::view;

pub async fn handle_add(
    session: &mut Session,
    title: &str,
    author: &str,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let result = session.add_book(title, author);
    if result.is_ok() {
        tracing::info!(title, "book added");
    }
    send_outcome(
        result,
        format!("Added \"{}\" to your journal.", title.trim()),
        tx,
    )
    .await
}

pub async fn handle_select(
    session: &mut Session,
    title: &str,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match session.select(title) {
        Ok(()) => {
            tx.send(AppEvent::Notice(format!("Now viewing \"{title}\".")))
                .await?;
        }
        Err(e) => {
            tracing::warn!(title, "select rejected: {e}");
            tx.send(AppEvent::Warning(e.to_string())).await?;
        }
    }

    Ok(())
}

pub async fn handle_list(session: &mut Session, tx: &AsyncSender<AppEvent>) -> anyhow::Result<()> {
    tx.send(AppEvent::ShowJournal(view::journal_view(session)))
        .await?;
    Ok(())
}
