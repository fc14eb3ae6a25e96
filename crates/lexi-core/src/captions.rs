//! Caption timeline lookups.
//!
//! Segments are expected in ascending `start` order. Nothing here sorts or
//! rejects input on the hot path: `active_index` runs on every playback tick
//! and is a single linear scan that returns the first qualifying segment.
//! Use [`check_ordering`] once, when a track is loaded, to reject bad data.

use lexi_types::{CaptionSegment, ContextLine, ContextWindow};

use crate::error::CoreError;

/// Lines kept on each side of the current caption
pub const CONTEXT_RADIUS: usize = 2;

/// Estimated seconds per spoken word, used for word seek targets
pub const SECONDS_PER_WORD: f64 = 2.0;

/// Index of the caption active at `time`, looking `buffer` seconds ahead.
///
/// Returns `None` for an empty track or when the adjusted time falls before
/// the first caption.
pub fn active_index(segments: &[CaptionSegment], time: f64, buffer: f64) -> Option<usize> {
    let adjusted = time + buffer;

    for (i, segment) in segments.iter().enumerate() {
        if adjusted >= segment.start {
            match segments.get(i + 1) {
                None => return Some(i),
                Some(next) if adjusted < next.start => return Some(i),
                Some(_) => {}
            }
        }
    }

    None
}

/// Captions around `index`: up to two before, the caption itself, up to two after.
///
/// An index past the end yields no current line and no following lines.
pub fn build_context(segments: &[CaptionSegment], index: usize) -> ContextWindow {
    let len = segments.len();

    let previous = (index.saturating_sub(CONTEXT_RADIUS)..index.min(len))
        .map(|i| ContextLine::from(&segments[i]))
        .collect();

    let current = segments.get(index).map(ContextLine::from);

    let next_end = len.min(index.saturating_add(CONTEXT_RADIUS + 1));
    let next = (index.saturating_add(1)..next_end)
        .map(|i| ContextLine::from(&segments[i]))
        .collect();

    ContextWindow {
        previous,
        current,
        next,
    }
}

/// Reject tracks whose segments go backwards in time
pub fn check_ordering(segments: &[CaptionSegment]) -> Result<(), CoreError> {
    for (i, pair) in segments.windows(2).enumerate() {
        if pair[1].start < pair[0].start {
            return Err(CoreError::UnsortedCaptions {
                index: i + 1,
                start: pair[1].start,
                previous: pair[0].start,
            });
        }
    }
    Ok(())
}

/// A clickable word inside a caption
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionWord<'a> {
    pub text: &'a str,
    pub position: usize,
    /// Estimated time the word is spoken
    pub seek_time: f64,
}

pub fn caption_words(segment: &CaptionSegment) -> Vec<CaptionWord<'_>> {
    segment
        .text
        .split(' ')
        .filter(|w| !w.is_empty())
        .enumerate()
        .map(|(position, text)| CaptionWord {
            text,
            position,
            seek_time: segment.start + position as f64 * SECONDS_PER_WORD,
        })
        .collect()
}

/// Render seconds as `m:ss`
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(starts: &[f64]) -> Vec<CaptionSegment> {
        starts
            .iter()
            .enumerate()
            .map(|(i, &s)| CaptionSegment::new(s, 1.0, format!("line {i}")))
            .collect()
    }

    fn texts(lines: &[ContextLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn empty_track_has_no_active_caption() {
        assert_eq!(active_index(&[], 0.0, 0.2), None);
        assert_eq!(active_index(&[], 100.0, 0.2), None);
    }

    #[test]
    fn before_first_caption_is_none() {
        let segments = track(&[5.0, 7.0]);
        assert_eq!(active_index(&segments, 4.0, 0.2), None);
        assert_eq!(active_index(&segments, 4.79, 0.2), None);
    }

    #[test]
    fn buffer_pulls_next_caption_forward() {
        let segments = track(&[0.0, 2.0, 5.0]);
        assert_eq!(active_index(&segments, 1.7, 0.0), Some(0));
        assert_eq!(active_index(&segments, 1.85, 0.2), Some(1));
        assert_eq!(active_index(&segments, 4.8, 0.2), Some(2));
    }

    #[test]
    fn picks_unique_interval_for_sorted_track() {
        let starts = [0.0, 1.5, 3.0, 4.25, 10.0];
        let segments = track(&starts);

        let mut t = 0.0;
        while t < 20.0 {
            let adjusted = t + 0.2;
            let expected = starts
                .iter()
                .enumerate()
                .filter(|&(i, &s)| {
                    adjusted >= s && starts.get(i + 1).is_none_or(|&n| adjusted < n)
                })
                .map(|(i, _)| i)
                .next();
            assert_eq!(active_index(&segments, t, 0.2), expected, "t = {t}");
            t += 0.05;
        }
    }

    #[test]
    fn last_caption_stays_active_past_its_end() {
        let segments = track(&[0.0, 2.0]);
        assert_eq!(active_index(&segments, 500.0, 0.2), Some(1));
    }

    #[test]
    fn unsorted_track_returns_first_qualifying_index() {
        // adjusted 4.0 lands in [3.0, 8.0)
        let segments = track(&[6.0, 3.0, 8.0, 1.0]);
        assert_eq!(active_index(&segments, 3.8, 0.2), Some(1));
        // only the last segment starts at or before 1.0
        assert_eq!(active_index(&segments, 1.0, 0.0), Some(3));
        assert!(check_ordering(&segments).is_err());
    }

    #[test]
    fn overlapping_segments_use_start_only() {
        let segments = vec![
            CaptionSegment::new(0.0, 10.0, "long"),
            CaptionSegment::new(2.0, 1.0, "short"),
        ];
        assert_eq!(active_index(&segments, 5.0, 0.0), Some(1));
        assert!(check_ordering(&segments).is_ok());
    }

    #[test]
    fn check_ordering_reports_offending_index() {
        let segments = track(&[0.0, 2.0, 1.0]);
        assert_eq!(
            check_ordering(&segments),
            Err(CoreError::UnsortedCaptions {
                index: 2,
                start: 1.0,
                previous: 2.0
            })
        );
    }

    #[test]
    fn context_in_middle_has_two_each_side() {
        let segments = track(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let window = build_context(&segments, 3);

        assert_eq!(texts(&window.previous), ["line 1", "line 2"]);
        assert_eq!(window.current.unwrap().text, "line 3");
        assert_eq!(texts(&window.next), ["line 4", "line 5"]);
    }

    #[test]
    fn context_clips_at_track_edges() {
        let segments = track(&[0.0, 1.0, 2.0]);

        let first = build_context(&segments, 0);
        assert!(first.previous.is_empty());
        assert_eq!(texts(&first.next), ["line 1", "line 2"]);

        let last = build_context(&segments, 2);
        assert_eq!(texts(&last.previous), ["line 0", "line 1"]);
        assert!(last.next.is_empty());
    }

    #[test]
    fn context_past_end_stays_in_bounds() {
        let segments = track(&[0.0, 1.0, 2.0]);

        let window = build_context(&segments, 3);
        assert_eq!(texts(&window.previous), ["line 1", "line 2"]);
        assert!(window.current.is_none());
        assert!(window.next.is_empty());

        assert!(build_context(&segments, usize::MAX).is_empty());
    }

    #[test]
    fn context_of_empty_track_is_empty() {
        assert!(build_context(&[], 0).is_empty());
    }

    #[test]
    fn context_never_exceeds_radius() {
        let segments = track(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        for i in 0..segments.len() + 3 {
            let window = build_context(&segments, i);
            assert!(window.previous.len() <= CONTEXT_RADIUS);
            assert!(window.next.len() <= CONTEXT_RADIUS);
        }
    }

    #[test]
    fn words_get_estimated_seek_times() {
        let segment = CaptionSegment::new(10.0, 4.0, "How are  you");
        let words = caption_words(&segment);

        let pairs: Vec<(&str, f64)> = words.iter().map(|w| (w.text, w.seek_time)).collect();
        assert_eq!(pairs, [("How", 10.0), ("are", 12.0), ("you", 14.0)]);
    }

    #[test]
    fn timestamps_render_minutes_and_seconds() {
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(59.9), "0:59");
        assert_eq!(format_timestamp(61.0), "1:01");
        assert_eq!(format_timestamp(3725.0), "62:05");
        assert_eq!(format_timestamp(-3.0), "0:00");
    }
}
