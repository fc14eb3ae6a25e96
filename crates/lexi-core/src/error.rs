#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid parameters for context capture: {0}")]
    InvalidContext(String),

    #[error("Caption {index} starts at {start}s, before the previous caption at {previous}s")]
    UnsortedCaptions {
        index: usize,
        start: f64,
        previous: f64,
    },
}
