//! Decide whether clicked text can be sent to the dictionary.

use unicode_normalization::UnicodeNormalization;

/// Straight and curly quotes, angle quotes, backtick, acute accent
const APOSTROPHE_LIKE: [char; 7] = ['\'', '\u{2019}', '\u{2018}', '\u{2039}', '\u{203A}', '`', '\u{00B4}'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordClass {
    Invalid,
    /// Contains an apostrophe-like character; `word` uses a straight apostrophe
    Contraction { word: String },
    Regular { word: String },
}

impl WordClass {
    pub fn is_valid(&self) -> bool {
        !matches!(self, WordClass::Invalid)
    }

    /// Normalized form to use as cache key and lookup string
    pub fn lookup_word(&self) -> Option<&str> {
        match self {
            WordClass::Invalid => None,
            WordClass::Contraction { word } | WordClass::Regular { word } => Some(word),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            WordClass::Invalid => "invalid",
            WordClass::Contraction { .. } => "contraction",
            WordClass::Regular { .. } => "regular",
        }
    }
}

pub fn is_apostrophe_like(c: char) -> bool {
    APOSTROPHE_LIKE.contains(&c)
}

/// Lowercase and trim
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

pub fn classify_word(word: &str) -> WordClass {
    if word.is_empty() {
        return WordClass::Invalid;
    }

    let cleaned = normalize_word(word);
    if !cleaned.chars().any(|c| c.is_ascii_alphabetic()) {
        return WordClass::Invalid;
    }

    if cleaned.chars().any(is_apostrophe_like) {
        // Fold before NFKC, which splits the acute accent into a space and a combining mark
        let folded: String = cleaned
            .chars()
            .map(|c| if is_apostrophe_like(c) { '\'' } else { c })
            .collect::<String>()
            .nfkc()
            .collect();
        return WordClass::Contraction { word: folded };
    }

    WordClass::Regular { word: cleaned }
}

/// Classify untyped input; anything but a string is invalid
pub fn classify_value(value: &serde_json::Value) -> WordClass {
    match value.as_str() {
        Some(word) => classify_word(word),
        None => WordClass::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_and_non_strings_are_invalid() {
        assert_eq!(classify_word(""), WordClass::Invalid);
        assert_eq!(classify_value(&json!(null)), WordClass::Invalid);
        assert_eq!(classify_value(&json!(42)), WordClass::Invalid);
        assert_eq!(classify_value(&json!(["hello"])), WordClass::Invalid);
    }

    #[test]
    fn regular_words_are_lowercased_and_trimmed() {
        assert_eq!(
            classify_word("hello"),
            WordClass::Regular {
                word: "hello".to_string()
            }
        );
        assert_eq!(
            classify_value(&json!("  Hello ")),
            WordClass::Regular {
                word: "hello".to_string()
            }
        );
    }

    #[test]
    fn apostrophes_mark_contractions() {
        let class = classify_word("don't");
        assert_eq!(class.kind(), "contraction");
        assert_eq!(class.lookup_word(), Some("don't"));

        for raw in ["Don\u{2019}t", "don`t", "don\u{00B4}t", "don\u{2018}t"] {
            assert_eq!(
                classify_word(raw),
                WordClass::Contraction {
                    word: "don't".to_string()
                },
                "{raw}"
            );
        }
    }

    #[test]
    fn needs_at_least_one_letter() {
        assert_eq!(classify_word("42"), WordClass::Invalid);
        assert_eq!(classify_word("   "), WordClass::Invalid);
        assert_eq!(classify_word("--"), WordClass::Invalid);
        assert_eq!(classify_word("'"), WordClass::Invalid);
        assert!(classify_word("b2b").is_valid());
    }

    #[test]
    fn callers_can_branch_on_kind() {
        assert_eq!(classify_word("?").kind(), "invalid");
        assert_eq!(classify_word("it's").kind(), "contraction");
        assert_eq!(classify_word("word").kind(), "regular");
        assert_eq!(WordClass::Invalid.lookup_word(), None);
    }
}
