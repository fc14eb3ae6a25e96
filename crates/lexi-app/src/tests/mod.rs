use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use lexi_api::{
    ApiError, AuthApi, BackendClient, LoginResponse, RefreshResponse, RegisterForm,
    SavedWordsPage, TrendingPage, TrendingQuery, TrendingSource, User, Video, VocabularyStore,
};
use lexi_config::Config;
use lexi_core::language::NoContractions;
use lexi_dictionary::{DictionaryApi, DictionaryError, RawEntry};
use lexi_types::{AppEvent, DisplayEvent};
use serde_json::json;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::{AppState, Services};


pub const CAT: &str = r#"[{ "word": "cat", "meanings": [
    { "partOfSpeech": "noun", "definitions": [{ "definition": "A small feline." }] }
] }]"#;

pub const ARE: &str = r#"[{ "word": "are", "meanings": [
    { "partOfSpeech": "verb", "definitions": [{ "definition": "Plural of be." }] }
] }]"#;

pub const DONT: &str = r#"[{ "word": "don't", "meanings": [
    { "partOfSpeech": "verb", "definitions": [{ "definition": "Do not." }] }
] }]"#;

#[derive(Default)]
pub struct FakeDictionary {
    pub calls: AtomicUsize,
}

#[async_trait]
impl DictionaryApi for FakeDictionary {
    async fn fetch_entries(&self, word: &str) -> Result<Option<Vec<RawEntry>>, DictionaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let json = match word {
            "cat" => CAT,
            "are" => ARE,
            "don't" => DONT,
            _ => return Ok(None),
        };
        serde_json::from_str(json)
            .map(Some)
            .map_err(|e| DictionaryError::Malformed(e.to_string()))
    }
}

/// In-memory backend: auth, saved words and two pages of trending videos
#[derive(Default)]
pub struct FakeBackend {
    pub signed_in: Mutex<bool>,
    pub saved: Mutex<HashMap<String, String>>,
    pub trending_queries: Mutex<Vec<TrendingQuery>>,
}

fn unauthorized() -> ApiError {
    ApiError::Server {
        status: 401,
        detail: "Not authenticated".into(),
    }
}

#[async_trait]
impl AuthApi for FakeBackend {
    async fn register(&self, form: &RegisterForm) -> Result<serde_json::Value, ApiError> {
        Ok(json!({ "email": form.email }))
    }

    async fn login(&self, _email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        if password != "secret" {
            return Err(ApiError::Server {
                status: 401,
                detail: "Incorrect email or password".into(),
            });
        }
        *self.signed_in.lock().unwrap() = true;
        Ok(LoginResponse {
            access_token: Some("token".into()),
            token_type: Some("bearer".into()),
        })
    }

    async fn logout(&self) -> Result<serde_json::Value, ApiError> {
        *self.signed_in.lock().unwrap() = false;
        Ok(json!({}))
    }

    async fn refresh(&self) -> Result<RefreshResponse, ApiError> {
        if *self.signed_in.lock().unwrap() {
            Ok(RefreshResponse {
                google_tokens_valid: true,
            })
        } else {
            Err(unauthorized())
        }
    }

    async fn me(&self) -> Result<User, ApiError> {
        if !*self.signed_in.lock().unwrap() {
            return Err(unauthorized());
        }
        Ok(serde_json::from_value(json!({
            "email": "ann@example.com",
            "first_name": "Ann",
            "last_name": "Lee",
        }))
        .unwrap())
    }
}

#[async_trait]
impl VocabularyStore for FakeBackend {
    async fn save_word(&self, word: &str, video_id: &str) -> Result<serde_json::Value, ApiError> {
        let mut saved = self.saved.lock().unwrap();
        if saved.contains_key(word) {
            return Err(ApiError::Server {
                status: 400,
                detail: "Word already saved".into(),
            });
        }
        saved.insert(word.to_string(), video_id.to_string());
        Ok(json!({ "message": "Word saved" }))
    }

    async fn check_word(&self, word: &str) -> Result<bool, ApiError> {
        Ok(self.saved.lock().unwrap().contains_key(word))
    }

    async fn saved_words(&self, skip: u32, limit: u32) -> Result<SavedWordsPage, ApiError> {
        let saved = self.saved.lock().unwrap();
        let mut words: Vec<_> = saved.iter().collect();
        words.sort();
        let words = words
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .map(|(word, video)| {
                serde_json::from_value(json!({
                    "id": 1,
                    "word": { "id": 1, "word": word },
                    "video_id": video,
                    "saved_at": "2024-05-01T12:00:00",
                }))
                .unwrap()
            })
            .collect();
        Ok(SavedWordsPage {
            words,
            total: Some(saved.len() as u64),
        })
    }

    async fn delete_word(&self, word: &str) -> Result<serde_json::Value, ApiError> {
        match self.saved.lock().unwrap().remove(word) {
            Some(_) => Ok(json!({ "message": "Word deleted" })),
            None => Err(ApiError::Server {
                status: 404,
                detail: "Word not found in vocabulary".into(),
            }),
        }
    }
}

#[async_trait]
impl TrendingSource for FakeBackend {
    async fn trending(&self, query: &TrendingQuery) -> Result<TrendingPage, ApiError> {
        self.trending_queries.lock().unwrap().push(query.clone());
        let (page, next) = match query.page_token.as_deref() {
            None => ("a", Some("p2".to_string())),
            Some(_) => ("b", None),
        };
        let items: Vec<Video> = (1..=2)
            .map(|i| {
                serde_json::from_value(json!({
                    "video_id": format!("{page}{i}"),
                    "title": format!("Video {page}{i}"),
                }))
                .unwrap()
            })
            .collect();
        Ok(TrendingPage {
            items,
            next_page_token: next,
            region: Some(query.region.clone()),
            category: query.category_id.clone(),
        })
    }
}

pub fn test_state(backend: Arc<FakeBackend>, dictionary: Arc<FakeDictionary>) -> Arc<AppState> {
    let services = Services {
        // video endpoints are never reached in these tests
        backend: Arc::new(BackendClient::new("http://127.0.0.1:9").unwrap()),
        auth: backend.clone(),
        store: backend.clone(),
        trending: backend,
        dictionary,
        contractions: Arc::new(NoContractions),
    };
    Arc::new(AppState::with_services(Config::default(), services))
}

/// Event loop running on fakes, driven through its channels
pub struct Harness {
    pub state: Arc<AppState>,
    pub backend: Arc<FakeBackend>,
    pub dictionary: Arc<FakeDictionary>,
    pub input: AsyncSender<AppEvent>,
    pub output: AsyncReceiver<DisplayEvent>,
    pub cancel: CancellationToken,
    pub task: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    pub fn start() -> Self {
        let backend = Arc::new(FakeBackend::default());
        let dictionary = Arc::new(FakeDictionary::default());
        let state = test_state(backend.clone(), dictionary.clone());

        let (input, input_rx) = kanal::bounded_async(64);
        let (output_tx, output) = kanal::bounded_async(64);
        let cancel = CancellationToken::new();
        let task = tokio::spawn(event_loop(state.clone(), input_rx, output_tx, cancel.clone()));

        Self {
            state,
            backend,
            dictionary,
            input,
            output,
            cancel,
            task,
        }
    }

    pub async fn send(&self, line: &str) {
        self.input
            .send(AppEvent::TextInput(line.to_string()))
            .await
            .expect("send failed");
    }

    pub async fn next(&self) -> DisplayEvent {
        match timeout(Duration::from_secs(2), self.output.recv()).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => panic!("Channel error: {}", e),
            Err(_) => panic!("Timeout waiting for display event"),
        }
    }

    pub async fn status(&self) -> String {
        match self.next().await {
            DisplayEvent::Status(message) => message,
            other => panic!("Expected status, got {:?}", other),
        }
    }

    pub async fn error(&self) -> String {
        match self.next().await {
            DisplayEvent::Error(message) => message,
            other => panic!("Expected error, got {:?}", other),
        }
    }

    pub async fn list(&self) -> (String, Vec<String>) {
        match self.next().await {
            DisplayEvent::List { title, items } => (title, items),
            other => panic!("Expected list, got {:?}", other),
        }
    }
}
