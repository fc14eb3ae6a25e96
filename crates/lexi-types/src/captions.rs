use serde::{Deserialize, Serialize};

/// One timed caption line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    /// Offset from the start of the video, in seconds
    pub start: f64,
    /// Length in seconds
    #[serde(default, alias = "dur")]
    pub duration: f64,
    pub text: String,
}

impl CaptionSegment {
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            text: text.into(),
        }
    }

    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// Caption payload returned by the backend for one video
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaptionTrack {
    #[serde(default)]
    pub lang: Option<String>,
    /// "human" or "auto"
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default, alias = "captions")]
    pub segments: Vec<CaptionSegment>,
}

impl CaptionTrack {
    pub fn is_human(&self) -> bool {
        self.source.as_deref() == Some("human")
    }
}

/// Caption text shown around a clicked word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextLine {
    pub text: String,
}

impl From<&CaptionSegment> for ContextLine {
    fn from(segment: &CaptionSegment) -> Self {
        Self {
            text: segment.text.clone(),
        }
    }
}

/// Up to two lines before and after the current caption
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextWindow {
    pub previous: Vec<ContextLine>,
    pub current: Option<ContextLine>,
    pub next: Vec<ContextLine>,
}

impl ContextWindow {
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty() && self.current.is_none() && self.next.is_empty()
    }
}
