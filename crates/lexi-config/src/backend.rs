use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:8000".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the REST backend
    #[serde(default = "default_url")]
    pub url: String,
}

impl BackendConfig {
    pub fn new() -> Self {
        let url = std::env::var("BACKEND_URL").unwrap_or_else(|_| default_url());

        Self { url }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { url: default_url() }
    }
}
