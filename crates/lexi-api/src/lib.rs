mod auth;
mod client;
mod error;
mod session;
mod trending;
mod videos;
mod vocabulary;

pub use auth::{AuthApi, LoginResponse, OAuthIntent, RefreshResponse, RegisterForm, User};
pub use client::BackendClient;
pub use error::{ApiError, extract_detail};
pub use session::{Session, SessionState};
pub use trending::{FetchOutcome, FetchRequest, FeedState, TrendingFeed};
pub use videos::{
    Thumbnail, Thumbnails, TrendingPage, TrendingQuery, TrendingSource, Video, VocabExample,
    VocabSummary, VocabToken,
};
pub use vocabulary::{SavedWord, SavedWordsPage, VocabularyStore, WordRef};
