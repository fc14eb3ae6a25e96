use serde::{Deserialize, Serialize};

use self::backend::BackendConfig;
use self::dictionary::DictionaryConfig;
use self::playback::PlaybackConfig;
use self::trending::TrendingConfig;

pub mod backend;
pub mod dictionary;
pub mod playback;
pub mod trending;

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub backend: BackendConfig,
    pub dictionary: DictionaryConfig,
    pub playback: PlaybackConfig,
    pub trending: TrendingConfig,
}

impl Config {
    /// Defaults with environment overrides
    pub fn new() -> Self {
        Config {
            backend: BackendConfig::new(),
            dictionary: DictionaryConfig::new(),
            playback: PlaybackConfig::new(),
            trending: TrendingConfig::new(),
        }
    }
}
