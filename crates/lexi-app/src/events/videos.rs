use kanal::AsyncSender;
use lexi_api::{FetchOutcome, FetchRequest, Video};
use lexi_core::captions::format_timestamp;
use lexi_types::DisplayEvent;

use crate::state::AppState;

fn video_line(video: &Video) -> String {
    match &video.channel_title {
        Some(channel) => format!("{}  {} ({})", video.video_id, video.title, channel),
        None => format!("{}  {}", video.video_id, video.title),
    }
}

/// Show the loaded feed, or the pages just added
async fn show_feed(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    outcome: FetchOutcome,
    only_added: bool,
) -> anyhow::Result<()> {
    let feed = state.trending.snapshot().await;

    let event = match outcome {
        FetchOutcome::Failed(message) => DisplayEvent::Error(message),
        FetchOutcome::Skipped if !feed.has_more => {
            DisplayEvent::Status("No more trending videos".into())
        }
        FetchOutcome::Skipped => DisplayEvent::Status("Already loading trending videos".into()),
        FetchOutcome::Loaded { added } => {
            let start = if only_added {
                feed.videos.len().saturating_sub(added)
            } else {
                0
            };
            let mut title = format!("Trending in {}", feed.region);
            if let Some(category) = &feed.category {
                title.push_str(&format!(" (category {category})"));
            }
            if feed.has_more {
                title.push_str(", `more` for the next page");
            }

            DisplayEvent::List {
                title,
                items: feed.videos[start..].iter().map(video_line).collect(),
            }
        }
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_trending(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    region: Option<String>,
    category: Option<String>,
) -> anyhow::Result<()> {
    let outcome = state
        .trending
        .fetch(FetchRequest {
            region: region.map(|r| r.to_uppercase()),
            category_id: category,
            reset: true,
        })
        .await;

    show_feed(state, app_to_ui_tx, outcome, false).await
}

pub async fn handle_more(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
) -> anyhow::Result<()> {
    let outcome = state.trending.load_more().await;
    show_feed(state, app_to_ui_tx, outcome, true).await
}

pub async fn handle_last_liked(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
) -> anyhow::Result<()> {
    let event = match state.backend.last_liked().await {
        Ok(Some(video)) => DisplayEvent::List {
            title: "Last liked video".into(),
            items: vec![video_line(&video), video.watch_url()],
        },
        Ok(None) => DisplayEvent::Status("No liked videos".into()),
        Err(e) => DisplayEvent::Error(e.message_or("Failed to load last liked video")),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_vocab(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    video_id: &str,
    lang: Option<&str>,
    top: u32,
) -> anyhow::Result<()> {
    let event = match state.backend.vocab(video_id, lang, top).await {
        Ok(summary) => DisplayEvent::List {
            title: format!(
                "Top words in {} ({})",
                video_id,
                summary.lang.as_deref().unwrap_or("unknown language")
            ),
            items: summary
                .tokens
                .iter()
                .map(|token| match token.examples.first() {
                    Some(example) => format!(
                        "{} x{}  [{}] {}",
                        token.lemma,
                        token.count,
                        format_timestamp(example.ts),
                        example.text
                    ),
                    None => format!("{} x{}", token.lemma, token.count),
                })
                .collect(),
        },
        Err(e) => DisplayEvent::Error(e.message_or("Failed to extract vocabulary")),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}
