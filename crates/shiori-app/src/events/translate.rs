use std::sync::Arc;

use kanal::AsyncSender;
use shiori_translator::{DeepLTranslator, Translator, code_for};
use shiori_types::AppEvent;

use crate::state::AppState;

const FAILURE_MESSAGE: &str = "Translation failed. Please try again later.";

pub async fn handle_translate(
    state: Arc<AppState>,
    translator: Option<&DeepLTranslator>,
    word: &str,
    language: &str,
    tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let Some(translator) = translator else {
        tx.send(AppEvent::Warning(
            "Translation is not configured; set SHIORI_TRANSLATE_KEY.".to_string(),
        ))
        .await?;
        return Ok(());
    };

    let target = if language.trim().is_empty() {
        let config = state.config.read().await;
        config.translator.default_target.clone()
    } else {
        match code_for(language) {
            Some(code) => code.to_string(),
            None => {
                tx.send(AppEvent::Warning(format!(
                    "Unknown language \"{language}\". Try \"languages\" for the supported set.",
                )))
                .await?;
                return Ok(());
            }
        }
    };

    match translator.translate(word, &target).await {
        Ok(translation) => {
            tx.send(AppEvent::ShowTranslation {
                word: word.to_string(),
                language: target,
                text: translation.text,
            })
            .await?;
        }
        Err(e) => {
            tracing::error!(word, "translation failed: {e}");
            tx.send(AppEvent::Warning(FAILURE_MESSAGE.to_string()))
                .await?;
        }
    }

    Ok(())
}
