use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::captions::ContextWindow;
use crate::dictionary::WordLookupResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoPosition {
    pub index: usize,
    pub total: usize,
}

/// Everything captured at the moment a word is clicked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordContext {
    /// Lowercased and trimmed
    pub word: String,
    /// Playback position in seconds
    pub timestamp: f64,
    pub capture_time: DateTime<Utc>,
    pub context: ContextWindow,
    pub video_position: VideoPosition,
}

/// A clicked word merged with its dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRecord {
    #[serde(flatten)]
    pub context: WordContext,
    /// Expanded form when the word is a contraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion: Option<String>,
    pub definition: WordLookupResult,
}

impl VocabularyRecord {
    pub fn word(&self) -> &str {
        &self.context.word
    }
}
