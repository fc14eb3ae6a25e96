use std::time::Instant;

use lexi_types::CaptionSegment;

use crate::captions::active_index;

/// Anything that reports a playback position, such as an embedded player
pub trait TimeSource: Send + Sync {
    /// Position in seconds
    fn current_time(&self) -> f64;

    fn seek(&mut self, seconds: f64);
}

/// Wall-clock stand-in for a video player
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Position when the clock was last started or paused
    base: f64,
    started: Option<Instant>,
}

impl PlaybackClock {
    /// Paused clock at `position`
    pub fn new(position: f64) -> Self {
        Self {
            base: position.max(0.0),
            started: None,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.started.is_some()
    }

    pub fn play(&mut self) {
        self.play_at(Instant::now());
    }

    pub fn pause(&mut self) {
        self.pause_at(Instant::now());
    }

    pub fn play_at(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn pause_at(&mut self, now: Instant) {
        self.base = self.position_at(now);
        self.started = None;
    }

    pub fn position_at(&self, now: Instant) -> f64 {
        match self.started {
            Some(started) => self.base + now.saturating_duration_since(started).as_secs_f64(),
            None => self.base,
        }
    }
}

impl TimeSource for PlaybackClock {
    fn current_time(&self) -> f64 {
        self.position_at(Instant::now())
    }

    fn seek(&mut self, seconds: f64) {
        self.base = seconds.max(0.0);
        if self.started.is_some() {
            self.started = Some(Instant::now());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionChange {
    Entered(usize),
    /// Playback moved before the first caption
    Cleared,
}

/// Remembers the active caption between ticks and reports changes only
#[derive(Debug, Clone)]
pub struct CaptionTracker {
    buffer: f64,
    current: Option<usize>,
}

impl CaptionTracker {
    pub fn new(buffer: f64) -> Self {
        Self {
            buffer,
            current: None,
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = None;
    }

    pub fn update(&mut self, segments: &[CaptionSegment], time: f64) -> Option<CaptionChange> {
        let index = active_index(segments, time, self.buffer);
        if index == self.current {
            return None;
        }

        self.current = index;
        Some(match index {
            Some(i) => CaptionChange::Entered(i),
            None => CaptionChange::Cleared,
        })
    }
}
