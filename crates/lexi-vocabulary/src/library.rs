//! Client-side search and ordering of the saved word list.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use lexi_api::SavedWord;
use serde::{Deserialize, Serialize};

/// A saved word with the nested dictionary word flattened out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedWordSummary {
    pub id: serde_json::Value,
    pub word: String,
    pub video_id: Option<String>,
    pub saved_at: Option<String>,
    pub word_id: serde_json::Value,
    pub created_at: Option<String>,
}

impl From<SavedWord> for SavedWordSummary {
    fn from(saved: SavedWord) -> Self {
        Self {
            id: saved.id,
            word: saved.word.word,
            video_id: saved.video_id,
            saved_at: saved.saved_at,
            word_id: saved.word.id,
            created_at: saved.word.created_at,
        }
    }
}

impl SavedWordSummary {
    pub fn saved_time(&self) -> Option<DateTime<Utc>> {
        self.saved_at.as_deref().and_then(parse_timestamp)
    }
}

/// Accepts RFC 3339 and naive ISO timestamps, the latter read as UTC
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(value) {
        return Some(time.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    WordAsc,
    WordDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date_desc",
            SortOrder::DateAsc => "date_asc",
            SortOrder::WordAsc => "word_asc",
            SortOrder::WordDesc => "word_desc",
        }
    }

    fn compare(&self, a: &SavedWordSummary, b: &SavedWordSummary) -> Ordering {
        let by_word = || a.word.to_lowercase().cmp(&b.word.to_lowercase());
        match self {
            SortOrder::DateDesc => b.saved_time().cmp(&a.saved_time()),
            SortOrder::DateAsc => a.saved_time().cmp(&b.saved_time()),
            SortOrder::WordAsc => by_word(),
            SortOrder::WordDesc => by_word().reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_desc" => Ok(SortOrder::DateDesc),
            "date_asc" => Ok(SortOrder::DateAsc),
            "word_asc" => Ok(SortOrder::WordAsc),
            "word_desc" => Ok(SortOrder::WordDesc),
            other => Err(format!(
                "unknown sort order '{other}' (expected date_desc, date_asc, word_asc or word_desc)"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedWordQuery {
    /// Case-insensitive substring; blank matches everything
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl SavedWordQuery {
    pub fn apply(&self, words: &[SavedWordSummary]) -> Vec<SavedWordSummary> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut filtered: Vec<SavedWordSummary> = words
            .iter()
            .filter(|w| match &needle {
                Some(needle) => w.word.to_lowercase().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect();

        filtered.sort_by(|a, b| self.sort.compare(a, b));
        filtered
    }
}

/// The full saved list as loaded from the backend
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedLibrary {
    pub words: Vec<SavedWordSummary>,
    pub total: u64,
}

impl SavedLibrary {
    pub fn view(&self, query: &SavedWordQuery) -> Vec<SavedWordSummary> {
        query.apply(&self.words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn summary(word: &str, saved_at: &str) -> SavedWordSummary {
        SavedWordSummary {
            id: json!(word.len()),
            word: word.to_string(),
            video_id: Some("vid".into()),
            saved_at: Some(saved_at.to_string()),
            word_id: json!(1),
            created_at: None,
        }
    }

    fn words() -> Vec<SavedWordSummary> {
        vec![
            summary("banana", "2024-03-02T10:00:00"),
            summary("Apple", "2024-03-01T09:30:00.123456"),
            summary("cherry", "2024-03-03T08:00:00Z"),
        ]
    }

    fn names(words: &[SavedWordSummary]) -> Vec<&str> {
        words.iter().map(|w| w.word.as_str()).collect()
    }

    #[test]
    fn default_sort_is_newest_first() {
        let sorted = SavedWordQuery::default().apply(&words());
        assert_eq!(names(&sorted), ["cherry", "banana", "Apple"]);
    }

    #[test]
    fn sorts_by_date_and_word() {
        let mut query = SavedWordQuery {
            sort: SortOrder::DateAsc,
            ..Default::default()
        };
        assert_eq!(names(&query.apply(&words())), ["Apple", "banana", "cherry"]);

        query.sort = SortOrder::WordAsc;
        assert_eq!(names(&query.apply(&words())), ["Apple", "banana", "cherry"]);

        query.sort = SortOrder::WordDesc;
        assert_eq!(names(&query.apply(&words())), ["cherry", "banana", "Apple"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let query = SavedWordQuery {
            search: Some("  AN ".into()),
            sort: SortOrder::WordAsc,
        };
        assert_eq!(names(&query.apply(&words())), ["banana"]);

        let blank = SavedWordQuery {
            search: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(blank.apply(&words()).len(), 3);
    }

    #[test]
    fn sort_order_parses_from_str() {
        assert_eq!("word_desc".parse::<SortOrder>(), Ok(SortOrder::WordDesc));
        assert_eq!(SortOrder::DateAsc.as_str(), "date_asc");
        assert!("newest".parse::<SortOrder>().is_err());
    }

    #[test]
    fn flattens_backend_entries() {
        let saved: SavedWord = serde_json::from_value(json!({
            "id": 7,
            "word": { "id": 3, "word": "serendipity", "created_at": "2024-01-01T00:00:00" },
            "video_id": "abc",
            "saved_at": "2024-02-01T00:00:00"
        }))
        .unwrap();

        let summary = SavedWordSummary::from(saved);
        assert_eq!(summary.word, "serendipity");
        assert_eq!(summary.word_id, json!(3));
        assert_eq!(summary.id, json!(7));
        assert_eq!(summary.created_at.as_deref(), Some("2024-01-01T00:00:00"));
    }
}
