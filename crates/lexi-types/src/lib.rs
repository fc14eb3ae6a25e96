pub mod captions;
pub mod dictionary;
pub mod events;
pub mod vocabulary;

pub use captions::{CaptionSegment, CaptionTrack, ContextLine, ContextWindow};
pub use dictionary::{Definition, LegacyDefinition, License, Meaning, Phonetic, Region, WordLookupResult};
pub use events::{AppEvent, DisplayEvent};
pub use vocabulary::{VideoPosition, VocabularyRecord, WordContext};
