use std::sync::Arc;

use lexi_api::{AuthApi, BackendClient, Session, TrendingFeed, TrendingSource, VocabularyStore};
use lexi_config::Config;
use lexi_core::language::ContractionExpander;
use lexi_core::playback::{CaptionTracker, PlaybackClock, TimeSource};
use lexi_dictionary::{DictionaryApi, DictionaryService, FreeDictionaryApi};
use lexi_lang_english::EnglishContractions;
use lexi_types::CaptionSegment;
use lexi_vocabulary::VocabularyService;
use tokio::sync::{Mutex, RwLock};

pub type SharedDictionaryApi = Arc<dyn DictionaryApi>;

/// Remote collaborators the app talks to
pub struct Services {
    /// Video endpoints without a trait of their own
    pub backend: Arc<BackendClient>,
    pub auth: Arc<dyn AuthApi>,
    pub store: Arc<dyn VocabularyStore>,
    pub trending: Arc<dyn TrendingSource>,
    pub dictionary: SharedDictionaryApi,
    pub contractions: Arc<dyn ContractionExpander>,
}

impl Services {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let backend = Arc::new(BackendClient::new(&config.backend.url)?);
        tracing::info!("Backend: {}", backend.base_url());

        Ok(Self {
            auth: backend.clone(),
            store: backend.clone(),
            trending: backend.clone(),
            backend,
            dictionary: Arc::new(FreeDictionaryApi::new(config.dictionary.api_url.clone())),
            contractions: Arc::new(EnglishContractions::with_defaults()),
        })
    }
}

/// Loaded captions plus a clock standing in for the video player
pub struct Player {
    pub video_id: Option<String>,
    pub segments: Vec<CaptionSegment>,
    pub clock: PlaybackClock,
    pub tracker: CaptionTracker,
}

impl Player {
    pub fn new(caption_buffer: f64) -> Self {
        Self {
            video_id: None,
            segments: Vec::new(),
            clock: PlaybackClock::new(0.0),
            tracker: CaptionTracker::new(caption_buffer),
        }
    }

    /// Replace the loaded video; the clock starts paused at zero
    pub fn load(&mut self, video_id: &str, segments: Vec<CaptionSegment>) {
        self.video_id = Some(video_id.to_string());
        self.segments = segments;
        self.clock = PlaybackClock::new(0.0);
        self.tracker.reset();
    }

    pub fn is_loaded(&self) -> bool {
        self.video_id.is_some()
    }

    pub fn time(&self) -> f64 {
        self.clock.current_time()
    }

    /// End of the last caption
    pub fn end_time(&self) -> Option<f64> {
        self.segments.last().map(|s| s.end())
    }
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub backend: Arc<BackendClient>,
    pub session: Session,
    pub dictionary: Arc<DictionaryService<SharedDictionaryApi>>,
    pub vocabulary: VocabularyService<SharedDictionaryApi>,
    pub trending: TrendingFeed,
    pub player: Mutex<Player>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let services = Services::from_config(&config)?;
        Ok(Self::with_services(config, services))
    }

    pub fn with_services(config: Config, services: Services) -> Self {
        let dictionary = Arc::new(DictionaryService::new(
            services.dictionary,
            config.dictionary.cache_size,
        ));
        let vocabulary =
            VocabularyService::new(dictionary.clone(), services.store, services.contractions);
        let trending = TrendingFeed::new(
            services.trending,
            &config.trending.region,
            config.trending.page_size,
        );
        let player = Player::new(config.playback.caption_buffer_secs());

        Self {
            config: Arc::new(RwLock::new(config)),
            backend: services.backend,
            session: Session::new(services.auth),
            dictionary,
            vocabulary,
            trending,
            player: Mutex::new(player),
        }
    }
}
