use std::sync::Arc;

use tokio::sync::Mutex;

use crate::videos::{TrendingQuery, TrendingSource, Video};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub videos: Vec<Video>,
    pub next_page_token: Option<String>,
    pub region: String,
    pub category: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    pub has_more: bool,
}

impl FeedState {
    fn new(region: &str) -> Self {
        Self {
            videos: Vec::new(),
            next_page_token: None,
            region: region.to_string(),
            category: None,
            loading: false,
            error: None,
            has_more: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FetchRequest {
    /// Falls back to the feed's current region
    pub region: Option<String>,
    pub category_id: Option<String>,
    /// Drop loaded pages and start over
    pub reset: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Another fetch was in flight, or nothing more to load
    Skipped,
    Loaded { added: usize },
    Failed(String),
}

/// Paginated trending video list.
///
/// A fetch started while another is in flight is skipped.
pub struct TrendingFeed {
    source: Arc<dyn TrendingSource>,
    default_region: String,
    page_size: u32,
    state: Mutex<FeedState>,
}

impl TrendingFeed {
    pub fn new(source: Arc<dyn TrendingSource>, default_region: &str, page_size: u32) -> Self {
        Self {
            source,
            default_region: default_region.to_string(),
            page_size,
            state: Mutex::new(FeedState::new(default_region)),
        }
    }

    pub async fn snapshot(&self) -> FeedState {
        self.state.lock().await.clone()
    }

    pub async fn fetch(&self, request: FetchRequest) -> FetchOutcome {
        let query = {
            let mut state = self.state.lock().await;
            if state.loading {
                tracing::debug!("Trending fetch already in flight");
                return FetchOutcome::Skipped;
            }

            if request.reset {
                state.videos.clear();
                state.next_page_token = None;
                state.region = request
                    .region
                    .clone()
                    .unwrap_or_else(|| state.region.clone());
                state.category = request.category_id.clone();
                state.has_more = true;
            }
            state.loading = true;
            state.error = None;

            TrendingQuery {
                region: state.region.clone(),
                max_results: self.page_size,
                page_token: state.next_page_token.clone(),
                category_id: state.category.clone(),
                lang: None,
            }
        };

        let result = self.source.trending(&query).await;

        let mut state = self.state.lock().await;
        state.loading = false;
        match result {
            Ok(page) => {
                let added = page.items.len();
                state.videos.extend(page.items);
                state.has_more = page.next_page_token.is_some();
                state.next_page_token = page.next_page_token;
                if let Some(region) = page.region {
                    state.region = region;
                }
                if page.category.is_some() {
                    state.category = page.category;
                }
                tracing::debug!("Loaded {} trending videos", added);
                FetchOutcome::Loaded { added }
            }
            Err(e) => {
                tracing::error!("Failed to fetch trending videos: {}", e);
                let message = match &e {
                    crate::error::ApiError::Server { detail, .. } => detail.clone(),
                    _ => "Failed to load trending videos".to_string(),
                };
                state.error = Some(message.clone());
                FetchOutcome::Failed(message)
            }
        }
    }

    pub async fn load_more(&self) -> FetchOutcome {
        {
            let state = self.state.lock().await;
            if !state.has_more || state.loading {
                return FetchOutcome::Skipped;
            }
        }
        self.fetch(FetchRequest::default()).await
    }

    pub async fn change_region(&self, region: &str) -> FetchOutcome {
        self.fetch(FetchRequest {
            region: Some(region.to_string()),
            category_id: None,
            reset: true,
        })
        .await
    }

    pub async fn change_category(&self, category_id: Option<String>) -> FetchOutcome {
        self.fetch(FetchRequest {
            region: None,
            category_id,
            reset: true,
        })
        .await
    }

    pub async fn reset(&self) {
        *self.state.lock().await = FeedState::new(&self.default_region);
    }
}
