use std::collections::HashMap;

use lexi_core::language::ContractionExpander;
use lexi_core::word::is_apostrophe_like;

/// Words whose `'s` means "is" rather than a possessive
const S_IS_HOSTS: [&str; 12] = [
    "it", "he", "she", "that", "there", "here", "what", "where", "who", "how", "when", "why",
];

/// English contraction expander
pub struct EnglishContractions {
    irregular: HashMap<String, String>,
}

impl EnglishContractions {
    /// Create an expander with no irregular forms
    pub fn new() -> Self {
        Self {
            irregular: HashMap::new(),
        }
    }

    /// Create with common irregular forms
    pub fn with_defaults() -> Self {
        let mut irregular = HashMap::new();

        let forms = [
            ("won't", "will not"),
            ("can't", "cannot"),
            ("shan't", "shall not"),
            ("ain't", "is not"),
            ("let's", "let us"),
            ("y'all", "you all"),
            ("ma'am", "madam"),
            ("'tis", "it is"),
            ("'twas", "it was"),
            ("o'er", "over"),
            ("ne'er", "never"),
            ("e'er", "ever"),
        ];

        for (short, long) in forms {
            irregular.insert(short.to_string(), long.to_string());
        }

        Self { irregular }
    }

    fn expand_suffix(&self, word: &str) -> Option<String> {
        let has_letter = |s: &str| s.chars().any(|c| c.is_ascii_alphabetic());

        if let Some(stem) = word.strip_suffix("n't") {
            return has_letter(stem).then(|| format!("{stem} not"));
        }

        let (stem, suffix) = word.rsplit_once('\'')?;
        if !has_letter(stem) {
            return None;
        }

        let expansion = match suffix {
            "ll" => "will",
            "re" => "are",
            "ve" => "have",
            "d" => "would",
            "m" => "am",
            "s" if S_IS_HOSTS.contains(&stem) => "is",
            _ => return None,
        };

        Some(format!("{stem} {expansion}"))
    }
}

impl Default for EnglishContractions {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ContractionExpander for EnglishContractions {
    fn language_code(&self) -> &str {
        "en"
    }

    fn expand(&self, word: &str) -> Option<String> {
        let word: String = word
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if is_apostrophe_like(c) { '\'' } else { c })
            .collect();

        if let Some(long) = self.irregular.get(&word) {
            return Some(long.clone());
        }

        self.expand_suffix(&word)
    }
}
