use kanal::AsyncSender;
use lexi_types::DisplayEvent;

use crate::command::CacheAction;
use crate::state::AppState;

pub async fn handle_lookup(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    word: &str,
) -> anyhow::Result<()> {
    let class = state.dictionary.is_valid_word(word);
    let Some(lookup) = class.lookup_word() else {
        app_to_ui_tx
            .send(DisplayEvent::Error(format!(
                "\"{word}\" is not a valid word for dictionary lookup"
            )))
            .await?;
        return Ok(());
    };
    tracing::debug!("Looking up {} word '{}'", class.kind(), lookup);

    let event = match state.dictionary.get_definition(lookup).await {
        Ok(result) => DisplayEvent::Definition {
            word: lookup.to_string(),
            result: result.map(Box::new),
        },
        Err(e) => DisplayEvent::Error(format!("Lookup failed for \"{lookup}\": {e}")),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_cache(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    action: Option<CacheAction>,
) -> anyhow::Result<()> {
    match action.unwrap_or(CacheAction::Stats) {
        CacheAction::Stats => {
            let stats = state.dictionary.cache_stats().await;
            app_to_ui_tx
                .send(DisplayEvent::List {
                    title: format!("Dictionary cache ({}/{})", stats.size, stats.max_size),
                    items: stats.entries,
                })
                .await?;
        }
        CacheAction::Clear => {
            state.dictionary.clear_cache().await;
            tracing::info!("Dictionary cache cleared");
            app_to_ui_tx
                .send(DisplayEvent::Status("Dictionary cache cleared".into()))
                .await?;
        }
    }

    Ok(())
}
