use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_types::{AppEvent, DisplayEvent};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::{playback_ticker, watch_stdin};
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub app_to_ui: (AsyncSender<DisplayEvent>, AsyncReceiver<DisplayEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64),
            app_to_ui: kanal::bounded_async(256),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let poll = {
            let config = self.state.config.read().await;
            Duration::from_millis(config.playback.poll_ms.max(1))
        };

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.input_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.clone(),
        ));

        // UI loop
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Keyboard input
        tasks.spawn(watch_stdin(
            self.cancel_token.child_token(),
            self.channels.input_to_app.0.clone(),
        ));

        // Player position
        tasks.spawn(playback_ticker(
            self.state.clone(),
            poll,
            self.cancel_token.child_token(),
            self.channels.input_to_app.0.clone(),
        ));

        tasks
    }

    /// Cancelled on `quit`, end of input, or [`AppController::shutdown`]
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
