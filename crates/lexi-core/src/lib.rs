pub mod cache;
pub mod captions;
pub mod error;
pub mod language;
pub mod playback;
pub mod word;
