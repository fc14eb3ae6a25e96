#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("Word must be a non-empty string")]
    InvalidInput,

    #[error("Invalid dictionary URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed dictionary response: {0}")]
    Malformed(String),
}
