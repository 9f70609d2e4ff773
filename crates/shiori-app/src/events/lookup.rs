use kanal::AsyncSender;
use shiori_dictionary::DictionaryClient;
use shiori_types::AppEvent;

use crate::view;

/// One message for every lookup failure; the status detail is only logged.
const NOT_FOUND_MESSAGE: &str = "Word not found. Please check the spelling and try again.";

pub async fn handle_lookup(
    dictionary: &DictionaryClient,
    word: &str,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    match dictionary.define(word).await {
        Ok(definition) => {
            tx.send(AppEvent::ShowDefinition(view::definition_view(definition)))
                .await?;
        }
        Err(e) => {
            tracing::warn!(word, "lookup failed: {e}");
            tx.send(AppEvent::Warning(NOT_FOUND_MESSAGE.to_string()))
                .await?;
        }
    }

    Ok(())
}
