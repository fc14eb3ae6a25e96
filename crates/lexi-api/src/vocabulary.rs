use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::BackendClient;
use crate::error::ApiError;

/// Dictionary word as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRef {
    #[serde(default)]
    pub id: serde_json::Value,
    pub word: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One entry of the user's saved vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWord {
    #[serde(default)]
    pub id: serde_json::Value,
    pub word: WordRef,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub saved_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedWordsPage {
    #[serde(default)]
    pub words: Vec<SavedWord>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Backend storage for saved words
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    async fn save_word(&self, word: &str, video_id: &str) -> Result<serde_json::Value, ApiError>;

    async fn check_word(&self, word: &str) -> Result<bool, ApiError>;

    async fn saved_words(&self, skip: u32, limit: u32) -> Result<SavedWordsPage, ApiError>;

    async fn delete_word(&self, word: &str) -> Result<serde_json::Value, ApiError>;
}

#[derive(Deserialize)]
struct CheckResponse {
    #[serde(default)]
    saved: bool,
}

#[async_trait]
impl VocabularyStore for BackendClient {
    async fn save_word(&self, word: &str, video_id: &str) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&["vocabulary", "save"]);
        let body = json!({
            "word": word,
            "video_id": video_id,
        });
        self.send(self.http().post(url).json(&body)).await
    }

    async fn check_word(&self, word: &str) -> Result<bool, ApiError> {
        let url = self.endpoint(&["vocabulary", "check", word]);
        let response: CheckResponse = self.send(self.http().get(url)).await?;
        Ok(response.saved)
    }

    async fn saved_words(&self, skip: u32, limit: u32) -> Result<SavedWordsPage, ApiError> {
        let url = self.endpoint(&["vocabulary", "saved"]);
        let request = self
            .http()
            .get(url)
            .query(&[("skip", skip), ("limit", limit)]);
        self.send(request).await
    }

    async fn delete_word(&self, word: &str) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint(&["vocabulary", word]);
        self.send(self.http().delete(url)).await
    }
}
