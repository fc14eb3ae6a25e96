use std::io::BufRead;
use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use lexi_types::AppEvent;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Forward typed lines to the event loop.
///
/// Reading happens on a plain thread: a blocking stdin read can't be
/// cancelled and would hold up runtime shutdown.
pub async fn watch_stdin(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let handle = Handle::current();

    std::thread::Builder::new()
        .name("stdin".into())
        .spawn(move || {
            let stdin = std::io::stdin();
            forward_lines(stdin.lock(), &handle, &event_tx);
        })?;

    tracing::info!("Listening for commands on stdin");
    cancel.cancelled().await;
    tracing::info!("Input watcher stopping");

    Ok(())
}

/// Send each non-blank line, then `Shutdown` once the input ends
pub fn forward_lines<R: BufRead>(reader: R, handle: &Handle, event_tx: &AsyncSender<AppEvent>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        if handle.block_on(event_tx.send(AppEvent::TextInput(line))).is_err() {
            tracing::debug!("Event loop gone, dropping input");
            return;
        }
    }

    let _ = handle.block_on(event_tx.send(AppEvent::Shutdown));
}

/// Report the player position every `interval` while playing
pub async fn playback_ticker(
    state: Arc<AppState>,
    interval: Duration,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Playback ticker stopping");
                return Ok(());
            }
            _ = ticker.tick() => {}
        }

        let event = {
            let player = state.player.lock().await;
            if !player.clock.is_playing() {
                continue;
            }

            let time = player.time();
            match player.end_time() {
                Some(end) if time >= end => AppEvent::PlaybackEnded,
                _ => AppEvent::PlaybackTick { time },
            }
        };

        // A full queue just skips this tick
        if event_tx.try_send(event).is_err() {
            tracing::debug!("Event loop gone, stopping ticker");
            return Ok(());
        }
    }
}
