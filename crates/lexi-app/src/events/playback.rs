use kanal::AsyncSender;
use lexi_core::captions::{caption_words, check_ordering, format_timestamp};
use lexi_core::playback::{CaptionChange, TimeSource};
use lexi_types::{CaptionSegment, CaptionTrack, DisplayEvent};

use crate::state::AppState;

/// Fetch a caption track, sorting it if the backend sent it out of order
async fn fetch_track(
    state: &AppState,
    video_id: &str,
    lang: Option<&str>,
) -> Result<CaptionTrack, String> {
    let mut track = state
        .backend
        .captions(video_id, lang)
        .await
        .map_err(|e| e.message_or("Failed to load captions"))?;

    if let Err(e) = check_ordering(&track.segments) {
        tracing::warn!("{}; sorting captions for {}", e, video_id);
        track.segments.sort_by(|a, b| a.start.total_cmp(&b.start));
    }

    Ok(track)
}

fn caption_event(segments: &[CaptionSegment], index: usize) -> Option<DisplayEvent> {
    segments.get(index).map(|segment| DisplayEvent::Caption {
        index,
        total: segments.len(),
        start: segment.start,
        text: segment.text.clone(),
    })
}

pub async fn handle_captions(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    video_id: &str,
    lang: Option<&str>,
) -> anyhow::Result<()> {
    let event = match fetch_track(state, video_id, lang).await {
        Ok(track) => DisplayEvent::List {
            title: format!(
                "Captions for {} ({}, {})",
                video_id,
                track.lang.as_deref().unwrap_or("unknown language"),
                if track.is_human() { "human" } else { "auto" }
            ),
            items: track
                .segments
                .iter()
                .map(|s| format!("[{}] {}", format_timestamp(s.start), s.text))
                .collect(),
        },
        Err(message) => DisplayEvent::Error(message),
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_play(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    video_id: &str,
    from: f64,
    lang: Option<&str>,
) -> anyhow::Result<()> {
    let track = match fetch_track(state, video_id, lang).await {
        Ok(track) => track,
        Err(message) => {
            app_to_ui_tx.send(DisplayEvent::Error(message)).await?;
            return Ok(());
        }
    };

    let count = track.segments.len();
    {
        let mut player = state.player.lock().await;
        player.load(video_id, track.segments);
        player.clock.seek(from);
        player.clock.play();
    }
    tracing::info!("Playing {} with {} captions", video_id, count);

    let status = if count == 0 {
        format!("Playing {video_id}, but it has no captions")
    } else {
        format!("Playing {video_id} from {} ({count} captions)", format_timestamp(from))
    };
    app_to_ui_tx.send(DisplayEvent::Status(status)).await?;

    Ok(())
}

pub async fn handle_pause(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
) -> anyhow::Result<()> {
    let event = {
        let mut player = state.player.lock().await;
        if player.is_loaded() {
            player.clock.pause();
            DisplayEvent::Status(format!("Paused at {}", format_timestamp(player.time())))
        } else {
            DisplayEvent::Error("No video loaded".into())
        }
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_resume(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
) -> anyhow::Result<()> {
    let event = {
        let mut player = state.player.lock().await;
        if player.is_loaded() {
            player.clock.play();
            DisplayEvent::Status(format!("Resumed at {}", format_timestamp(player.time())))
        } else {
            DisplayEvent::Error("No video loaded".into())
        }
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

/// Jump and show the caption at the new position right away
pub async fn handle_seek(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    seconds: f64,
) -> anyhow::Result<()> {
    let events = {
        let mut player = state.player.lock().await;
        if !player.is_loaded() {
            vec![DisplayEvent::Error("No video loaded".into())]
        } else {
            player.clock.seek(seconds);
            let time = player.time();
            let mut events = vec![DisplayEvent::Status(format!(
                "Seeked to {}",
                format_timestamp(time)
            ))];

            let change = {
                let player = &mut *player;
                player.tracker.update(&player.segments, time)
            };
            if let Some(CaptionChange::Entered(index)) = change {
                events.extend(caption_event(&player.segments, index));
            }
            events
        }
    };

    for event in events {
        app_to_ui_tx.send(event).await?;
    }

    Ok(())
}

pub async fn handle_words(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
) -> anyhow::Result<()> {
    let event = {
        let player = state.player.lock().await;
        match player.tracker.current().and_then(|i| player.segments.get(i)) {
            Some(segment) => DisplayEvent::List {
                title: format!("Words in \"{}\"", segment.text),
                items: caption_words(segment)
                    .iter()
                    .map(|w| {
                        format!(
                            "{}. {} ~{}",
                            w.position + 1,
                            w.text,
                            format_timestamp(w.seek_time)
                        )
                    })
                    .collect(),
            },
            None => DisplayEvent::Error("No active caption".into()),
        }
    };
    app_to_ui_tx.send(event).await?;

    Ok(())
}

pub async fn handle_tick(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
    time: f64,
) -> anyhow::Result<()> {
    let event = {
        let mut player = state.player.lock().await;
        let player = &mut *player;
        match player.tracker.update(&player.segments, time) {
            Some(CaptionChange::Entered(index)) => caption_event(&player.segments, index),
            Some(CaptionChange::Cleared) => {
                tracing::debug!("No caption active at {:.2}s", time);
                None
            }
            None => None,
        }
    };

    if let Some(event) = event {
        app_to_ui_tx.send(event).await?;
    }

    Ok(())
}

pub async fn handle_end(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<DisplayEvent>,
) -> anyhow::Result<()> {
    let finished = {
        let mut player = state.player.lock().await;
        let playing = player.clock.is_playing();
        if playing {
            player.clock.pause();
        }
        playing
    };

    if finished {
        tracing::info!("Playback finished");
        app_to_ui_tx
            .send(DisplayEvent::Status("Playback finished".into()))
            .await?;
    }

    Ok(())
}
