use kanal::AsyncSender;
use shiori_journal::Session;
use shiori_types::AppEvent;

use super::send_outcome;

pub async fn handle_set(
    session: &mut Session,
    current_page: u32,
    total_pages: u32,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(title) = session.selected().map(str::to_string) else {
        tx.send(AppEvent::Warning(
            "Add a book to your journal first.".to_string(),
        ))
        .await?;
        return Ok(());
    };

    let result = session.set_progress(&title, current_page, total_pages);
    let percent = current_page.saturating_mul(100) / total_pages.max(1);
    send_outcome(
        result,
        format!("{current_page} of {total_pages} pages read ({percent}%)."),
        tx,
    )
    .await
}
