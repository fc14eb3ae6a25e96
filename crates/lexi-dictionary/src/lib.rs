mod api;
mod error;
mod normalize;
mod service;

pub use api::{DictionaryApi, FreeDictionaryApi, RawDefinition, RawEntry, RawMeaning, RawPhonetic};
pub use error::DictionaryError;
pub use normalize::{detect_region, normalize_entries};
pub use service::DictionaryService;
