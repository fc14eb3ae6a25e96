use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_poll_ms() -> u64 {
    100
}

fn default_caption_buffer_ms() -> u64 {
    200
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// How often the player position is polled
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
    /// Look-ahead added to the polled position before picking a caption
    #[serde(default = "default_caption_buffer_ms")]
    pub caption_buffer_ms: u64,
}

impl PlaybackConfig {
    pub fn new() -> Self {
        Self {
            poll_ms: env_or("PLAYBACK_POLL_MS", default_poll_ms()),
            caption_buffer_ms: env_or("CAPTION_BUFFER_MS", default_caption_buffer_ms()),
        }
    }

    pub fn caption_buffer_secs(&self) -> f64 {
        self.caption_buffer_ms as f64 / 1000.0
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            poll_ms: default_poll_ms(),
            caption_buffer_ms: default_caption_buffer_ms(),
        }
    }
}
