mod error;
pub mod library;
mod service;

pub use error::VocabularyError;
pub use library::{SavedLibrary, SavedWordQuery, SavedWordSummary, SortOrder};
pub use service::{VocabularyService, vocabulary_key};
