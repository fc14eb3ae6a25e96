use crate::dictionary::WordLookupResult;
use crate::vocabulary::VocabularyRecord;

/// Events flowing into the app's event loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A raw command line typed by the user
    TextInput(String),
    PlaybackTick { time: f64 },
    /// Playback passed the end of the last caption
    PlaybackEnded,
    /// Input closed
    Shutdown,
}

/// Events flowing out to the terminal
#[derive(Debug, Clone)]
pub enum DisplayEvent {
    Caption {
        index: usize,
        total: usize,
        start: f64,
        text: String,
    },
    Definition {
        word: String,
        result: Option<Box<WordLookupResult>>,
    },
    Record(Box<VocabularyRecord>),
    /// Titled list of one-line entries
    List {
        title: String,
        items: Vec<String>,
    },
    Status(String),
    Error(String),
}
