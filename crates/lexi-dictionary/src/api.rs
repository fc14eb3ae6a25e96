use async_trait::async_trait;
use lexi_types::License;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::error::DictionaryError;

/// Remote word-definition source
#[async_trait]
pub trait DictionaryApi: Send + Sync {
    /// Raw entries for `word`, or `None` when the source has no such word
    async fn fetch_entries(&self, word: &str) -> Result<Option<Vec<RawEntry>>, DictionaryError>;
}

#[async_trait]
impl<T: DictionaryApi + ?Sized> DictionaryApi for std::sync::Arc<T> {
    async fn fetch_entries(&self, word: &str) -> Result<Option<Vec<RawEntry>>, DictionaryError> {
        (**self).fetch_entries(word).await
    }
}

/// Entry as returned by the upstream API
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<RawPhonetic>,
    #[serde(default)]
    pub meanings: Vec<RawMeaning>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeaning {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<RawDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDefinition {
    #[serde(default)]
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

/// Client for dictionaryapi.dev style endpoints (`{base}/{word}`)
#[derive(Clone)]
pub struct FreeDictionaryApi {
    client: reqwest::Client,
    base_url: String,
}

impl FreeDictionaryApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Word goes in as a single percent-encoded path segment
    pub fn entry_url(&self, word: &str) -> Result<Url, DictionaryError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| DictionaryError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| DictionaryError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }
}

#[async_trait]
impl DictionaryApi for FreeDictionaryApi {
    async fn fetch_entries(&self, word: &str) -> Result<Option<Vec<RawEntry>>, DictionaryError> {
        let url = self.entry_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(DictionaryError::Http {
                status: response.status().as_u16(),
            });
        }

        let entries: Vec<RawEntry> = response
            .json()
            .await
            .map_err(|e| DictionaryError::Malformed(e.to_string()))?;

        Ok(Some(entries))
    }
}
