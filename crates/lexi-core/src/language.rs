/// Expands contracted forms ("don't" -> "do not") for a language
pub trait ContractionExpander: Send + Sync {
    /// Language identifier (ISO 639-1 code)
    fn language_code(&self) -> &str;

    /// Expanded form, or None if the word isn't a known contraction
    fn expand(&self, word: &str) -> Option<String>;
}

/// Expander that knows no contractions
pub struct NoContractions;

impl ContractionExpander for NoContractions {
    fn language_code(&self) -> &str {
        "und"
    }

    fn expand(&self, _word: &str) -> Option<String> {
        None
    }
}
