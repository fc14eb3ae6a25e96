use async_trait::async_trait;
use lexi_types::CaptionTrack;
use serde::{Deserialize, Serialize};

use crate::client::BackendClient;
use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnails {
    #[serde(default)]
    pub default: Option<Thumbnail>,
    #[serde(default)]
    pub medium: Option<Thumbnail>,
    #[serde(default)]
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub video_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub channel_title: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

impl Video {
    /// Highest resolution thumbnail available
    pub fn best_thumbnail(&self) -> Option<&str> {
        self.thumbnails
            .high
            .as_ref()
            .or(self.thumbnails.medium.as_ref())
            .or(self.thumbnails.default.as_ref())
            .map(|t| t.url.as_str())
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendingPage {
    #[serde(default)]
    pub items: Vec<Video>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingQuery {
    pub region: String,
    pub max_results: u32,
    pub page_token: Option<String>,
    pub category_id: Option<String>,
    /// BCP-47 language code
    pub lang: Option<String>,
}

impl TrendingQuery {
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("region", self.region.clone()),
            ("max_results", self.max_results.to_string()),
        ];
        if let Some(token) = &self.page_token {
            params.push(("page_token", token.clone()));
        }
        if let Some(category) = &self.category_id {
            params.push(("category_id", category.clone()));
        }
        if let Some(lang) = &self.lang {
            params.push(("lang", lang.clone()));
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabExample {
    /// Seconds into the video
    pub ts: f64,
    pub text: String,
}

/// A word extracted from a video's captions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabToken {
    pub lemma: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub examples: Vec<VocabExample>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabSummary {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub tokens: Vec<VocabToken>,
}

/// Source of trending video pages
#[async_trait]
pub trait TrendingSource: Send + Sync {
    async fn trending(&self, query: &TrendingQuery) -> Result<TrendingPage, ApiError>;
}

#[async_trait]
impl TrendingSource for BackendClient {
    async fn trending(&self, query: &TrendingQuery) -> Result<TrendingPage, ApiError> {
        let url = self.endpoint(&["youtube", "trending"]);
        self.send(self.http().get(url).query(&query.params())).await
    }
}

impl BackendClient {
    pub async fn captions(
        &self,
        video_id: &str,
        lang: Option<&str>,
    ) -> Result<CaptionTrack, ApiError> {
        let url = self.endpoint(&["youtube", video_id, "captions"]);
        let mut request = self.http().get(url);
        if let Some(lang) = lang {
            request = request.query(&[("lang", lang)]);
        }
        self.send(request).await
    }

    pub async fn vocab(
        &self,
        video_id: &str,
        lang: Option<&str>,
        top_n: u32,
    ) -> Result<VocabSummary, ApiError> {
        let url = self.endpoint(&["youtube", video_id, "vocab"]);
        let mut request = self.http().get(url).query(&[("top_n", top_n)]);
        if let Some(lang) = lang {
            request = request.query(&[("lang", lang)]);
        }
        self.send(request).await
    }

    /// Most recently liked video of the signed-in Google account
    pub async fn last_liked(&self) -> Result<Option<Video>, ApiError> {
        let url = self.endpoint(&["youtube", "last-liked"]);
        self.send(self.http().get(url)).await
    }
}
