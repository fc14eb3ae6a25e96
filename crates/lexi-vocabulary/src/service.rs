use std::sync::Arc;

use chrono::Utc;
use lexi_api::{SavedWordsPage, VocabularyStore};
use lexi_core::captions::build_context;
use lexi_core::error::CoreError;
use lexi_core::language::ContractionExpander;
use lexi_core::word::{WordClass, classify_word, normalize_word};
use lexi_dictionary::{DictionaryApi, DictionaryService};
use lexi_types::{CaptionSegment, VideoPosition, VocabularyRecord, WordContext};

use crate::error::VocabularyError;
use crate::library::{SavedLibrary, SavedWordSummary};

/// Page size used when loading the whole saved list at once
pub const LIBRARY_LIMIT: u32 = 1000;

/// Key a word is stored under; contractions use their folded apostrophe
pub fn vocabulary_key(word: &str) -> String {
    match classify_word(word) {
        WordClass::Contraction { word } => word,
        _ => normalize_word(word),
    }
}

/// Turns word clicks into vocabulary records and talks to the backend
/// about saved words. Holds no state of its own.
pub struct VocabularyService<D> {
    dictionary: Arc<DictionaryService<D>>,
    store: Arc<dyn VocabularyStore>,
    contractions: Arc<dyn ContractionExpander>,
}

impl<D: DictionaryApi> VocabularyService<D> {
    pub fn new(
        dictionary: Arc<DictionaryService<D>>,
        store: Arc<dyn VocabularyStore>,
        contractions: Arc<dyn ContractionExpander>,
    ) -> Self {
        Self {
            dictionary,
            store,
            contractions,
        }
    }

    pub fn dictionary(&self) -> &DictionaryService<D> {
        &self.dictionary
    }

    /// Snapshot the captions around `index` at playback time `time`
    pub fn capture_word_context(
        &self,
        word: &str,
        segments: &[CaptionSegment],
        index: usize,
        time: f64,
    ) -> Result<WordContext, VocabularyError> {
        if word.trim().is_empty() {
            return Err(CoreError::InvalidContext("word is empty".into()).into());
        }
        if segments.is_empty() {
            return Err(CoreError::InvalidContext("no captions loaded".into()).into());
        }
        if index >= segments.len() {
            return Err(CoreError::InvalidContext(format!(
                "caption index {index} out of range for {} captions",
                segments.len()
            ))
            .into());
        }

        Ok(WordContext {
            word: normalize_word(word),
            timestamp: time,
            capture_time: Utc::now(),
            context: build_context(segments, index),
            video_position: VideoPosition {
                index,
                total: segments.len(),
            },
        })
    }

    pub async fn process_word_click(
        &self,
        word: &str,
        segments: &[CaptionSegment],
        index: usize,
        time: f64,
    ) -> Result<VocabularyRecord, VocabularyError> {
        let class = self.dictionary.is_valid_word(word);
        let Some(lookup) = class.lookup_word() else {
            return Err(VocabularyError::InvalidWord(word.to_string()));
        };

        let context = self.capture_word_context(lookup, segments, index, time)?;

        let definition = self
            .dictionary
            .get_definition(lookup)
            .await?
            .ok_or_else(|| VocabularyError::NoDefinition(word.to_string()))?;

        let expansion = match &class {
            WordClass::Contraction { word } => self.contractions.expand(word),
            _ => None,
        };

        tracing::info!("Processed click on '{}' at {:.1}s", context.word, time);

        Ok(VocabularyRecord {
            context,
            expansion,
            definition,
        })
    }

    pub async fn save_word(
        &self,
        word: &str,
        video_id: &str,
    ) -> Result<serde_json::Value, VocabularyError> {
        let word = vocabulary_key(word);
        let saved = self
            .store
            .save_word(&word, video_id)
            .await
            .map_err(|e| {
                tracing::error!("Save word error: {}", e);
                VocabularyError::Request(e.message_or("Failed to save word"))
            })?;

        tracing::info!("Saved '{}' from video {}", word, video_id);
        Ok(saved)
    }

    /// Always asks the backend; failures read as "not saved"
    pub async fn is_word_saved(&self, word: &str) -> bool {
        let word = vocabulary_key(word);
        if word.is_empty() {
            return false;
        }

        match self.store.check_word(&word).await {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!("Check word saved error for '{}': {}", word, e);
                false
            }
        }
    }

    pub async fn get_saved_words(
        &self,
        skip: u32,
        limit: u32,
    ) -> Result<SavedWordsPage, VocabularyError> {
        self.store.saved_words(skip, limit).await.map_err(|e| {
            tracing::error!("Get saved words error: {}", e);
            VocabularyError::Request(e.message_or("Failed to fetch saved words"))
        })
    }

    pub async fn delete_saved_word(&self, word: &str) -> Result<serde_json::Value, VocabularyError> {
        let word = vocabulary_key(word);
        let deleted = self.store.delete_word(&word).await.map_err(|e| {
            tracing::error!("Delete word error: {}", e);
            VocabularyError::Request(e.message_or("Failed to delete word"))
        })?;

        tracing::info!("Deleted '{}' from vocabulary", word);
        Ok(deleted)
    }

    /// Whole saved list, flattened for display
    pub async fn load_library(&self) -> Result<SavedLibrary, VocabularyError> {
        let page = self.get_saved_words(0, LIBRARY_LIMIT).await?;
        let words: Vec<SavedWordSummary> = page.words.into_iter().map(Into::into).collect();
        let total = page.total.unwrap_or(words.len() as u64);
        Ok(SavedLibrary { words, total })
    }
}
