use kanal::AsyncSender;
use lexi_types::DisplayEvent;
use lexi_vocabulary::{SavedWordQuery, SortOrder, vocabulary_key};

use crate::state::AppState;

/// Click a word in the active caption (or `index`) at the current position
pub async fn handle_click(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    word: &str,
    index: Option<usize>,
) -> anyhow::Result<()> {
    let (segments, index, time) = {
        let player = state.player.lock().await;
        (
            player.segments.clone(),
            index.or(player.tracker.current()),
            player.time(),
        )
    };

    let Some(index) = index else {
        app_to_ui_tx
            .send(DisplayEvent::Error(
                "No active caption; play a video or pass --index".into(),
            ))
            .await?;
        return Ok(());
    };

    match state
        .vocabulary
        .process_word_click(word, &segments, index, time)
        .await
    {
        Ok(record) => {
            let key = record.word().to_string();
            let saved =
                state.session.is_authenticated().await && state.vocabulary.is_word_saved(&key).await;
            app_to_ui_tx.send(DisplayEvent::Record(Box::new(record))).await?;
            if saved {
                app_to_ui_tx
                    .send(DisplayEvent::Status(format!(
                        "\"{key}\" is already in your vocabulary"
                    )))
                    .await?;
            }
        }
        Err(e) => {
            tracing::error!("Vocabulary processing error: {}", e);
            app_to_ui_tx.send(DisplayEvent::Error(e.to_string())).await?;
        }
    }

    Ok(())
}

pub async fn handle_save(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    word: &str,
    video: Option<String>,
) -> anyhow::Result<()> {
    let video = match video {
        Some(video) => Some(video),
        None => state.player.lock().await.video_id.clone(),
    };
    let Some(video) = video else {
        app_to_ui_tx
            .send(DisplayEvent::Error("No video loaded; pass --video".into()))
            .await?;
        return Ok(());
    };

    let event = match state.vocabulary.save_word(word, &video).await {
        Ok(_) => DisplayEvent::Status(format!("Saved \"{}\"", vocabulary_key(word))),
        Err(e) => DisplayEvent::Error(e.to_string()),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

/// Search and sort apply to the whole list; `skip`/`limit` page the result
pub async fn handle_saved(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    search: Option<String>,
    sort: SortOrder,
    skip: usize,
    limit: usize,
) -> anyhow::Result<()> {
    let library = match state.vocabulary.load_library().await {
        Ok(library) => library,
        Err(e) => {
            app_to_ui_tx.send(DisplayEvent::Error(e.to_string())).await?;
            return Ok(());
        }
    };

    let query = SavedWordQuery { search, sort };
    let matches = library.view(&query);
    let items: Vec<String> = matches
        .iter()
        .skip(skip)
        .take(limit)
        .map(|w| {
            let mut line = w.word.clone();
            if let Some(saved_at) = w.saved_time() {
                line.push_str(&format!("  saved {}", saved_at.format("%Y-%m-%d")));
            }
            if let Some(video) = &w.video_id {
                line.push_str(&format!("  from {video}"));
            }
            line
        })
        .collect();

    app_to_ui_tx
        .send(DisplayEvent::List {
            title: format!(
                "Saved words ({} shown, {} matching, {} total, {})",
                items.len(),
                matches.len(),
                library.total,
                query.sort.as_str()
            ),
            items,
        })
        .await?;

    Ok(())
}

pub async fn handle_delete(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    word: &str,
) -> anyhow::Result<()> {
    let event = match state.vocabulary.delete_saved_word(word).await {
        Ok(_) => DisplayEvent::Status(format!("Deleted \"{}\"", vocabulary_key(word))),
        Err(e) => DisplayEvent::Error(e.to_string()),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_check(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    word: &str,
) -> anyhow::Result<()> {
    let word = vocabulary_key(word);
    let message = if state.vocabulary.is_word_saved(&word).await {
        format!("\"{word}\" is saved")
    } else {
        format!("\"{word}\" is not saved")
    };
    app_to_ui_tx.send(DisplayEvent::Status(message)).await?;

    Ok(())
}
