use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_region() -> String {
    "US".to_string()
}

fn default_page_size() -> u32 {
    25
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendingConfig {
    /// ISO 3166-1 alpha-2 country code
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl TrendingConfig {
    pub fn new() -> Self {
        let region = std::env::var("TRENDING_REGION").unwrap_or_else(|_| default_region());

        Self {
            region,
            page_size: env_or("TRENDING_PAGE_SIZE", default_page_size()),
        }
    }
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            page_size: default_page_size(),
        }
    }
}
