use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_cache_size() -> usize {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Maximum number of cached lookups, including "not found" entries
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let api_url = std::env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_api_url());
        let cache_size = env_or("DICTIONARY_CACHE_SIZE", default_cache_size());

        Self {
            api_url,
            cache_size,
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            cache_size: default_cache_size(),
        }
    }
}
