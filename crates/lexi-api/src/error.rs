#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response carrying a `detail` message
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// Non-2xx response without a usable body
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } | ApiError::Status { status } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Server detail, else transport message, else `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

/// Pull a human-readable `detail` out of an error body.
///
/// Handles both `{"detail": "..."}` and validation lists
/// `{"detail": [{"msg": "..."}]}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;

    match json.get("detail")? {
        serde_json::Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        serde_json::Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
