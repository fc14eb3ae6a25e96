use lexi_core::error::CoreError;
use lexi_dictionary::DictionaryError;

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("\"{0}\" is not a valid word for dictionary lookup")]
    InvalidWord(String),

    #[error(transparent)]
    InvalidContext(#[from] CoreError),

    #[error("No definition found for \"{0}\"")]
    NoDefinition(String),

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// Backend request failed; carries the most specific message available
    #[error("{0}")]
    Request(String),
}
