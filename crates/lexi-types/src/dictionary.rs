use serde::{Deserialize, Serialize};

/// Pronunciation region guessed from the audio file name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "AU")]
    Au,
    International,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Uk => "UK",
            Region::Us => "US",
            Region::Au => "AU",
            Region::International => "International",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
    pub region: Option<Region>,
    pub source_url: Option<String>,
    pub license: Option<License>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// All definitions for one part of speech
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Flat definition kept for older consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDefinition {
    pub part_of_speech: String,
    pub definition: String,
    /// Empty when the upstream entry has no example
    pub example: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Normalized dictionary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLookupResult {
    pub word: String,
    pub phonetics: Vec<Phonetic>,
    /// First phonetic text, kept for older consumers
    pub phonetic: String,
    /// First audio URL, kept for older consumers
    pub audio: String,
    pub meanings: Vec<Meaning>,
    /// Truncated view: 3 parts of speech, 2 definitions each
    pub definitions: Vec<LegacyDefinition>,
    pub global_synonyms: Vec<String>,
    pub global_antonyms: Vec<String>,
    pub source_urls: Vec<String>,
    pub license: Option<License>,
}

impl WordLookupResult {
    pub fn parts_of_speech(&self) -> Vec<&str> {
        self.meanings
            .iter()
            .map(|m| m.part_of_speech.as_str())
            .collect()
    }
}
