//! Turn upstream entries into a [`WordLookupResult`].

use std::collections::HashSet;

use lexi_types::{Definition, LegacyDefinition, Meaning, Phonetic, Region, WordLookupResult};

use crate::api::{RawEntry, RawMeaning, RawPhonetic};

const LEGACY_PARTS_OF_SPEECH: usize = 3;
const LEGACY_DEFINITIONS_PER_PART: usize = 2;
const LEGACY_RELATED_WORDS: usize = 3;

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

/// Region from audio file naming (`...-uk.mp3`, `...-us.mp3`, `...-au.mp3`)
pub fn detect_region(audio_url: Option<&str>) -> Option<Region> {
    let url = audio_url.filter(|u| !u.is_empty())?;

    Some(if url.contains("-uk.") {
        Region::Uk
    } else if url.contains("-us.") {
        Region::Us
    } else if url.contains("-au.") {
        Region::Au
    } else {
        Region::International
    })
}

/// Normalize the first entry; an empty list means "not found"
pub fn normalize_entries(entries: Vec<RawEntry>) -> Option<WordLookupResult> {
    let entry = entries.into_iter().next()?;

    let phonetic = non_empty(entry.phonetic.as_ref())
        .or_else(|| entry.phonetics.iter().find_map(|p| non_empty(p.text.as_ref())))
        .unwrap_or_default();
    let audio = entry
        .phonetics
        .iter()
        .find_map(|p| non_empty(p.audio.as_ref()))
        .unwrap_or_default();

    Some(WordLookupResult {
        phonetics: extract_phonetics(&entry.phonetics),
        phonetic,
        audio,
        meanings: extract_meanings(&entry.meanings),
        definitions: extract_legacy_definitions(&entry.meanings),
        global_synonyms: collect_unique(&entry.meanings, |m| &m.synonyms, |d| &d.synonyms),
        global_antonyms: collect_unique(&entry.meanings, |m| &m.antonyms, |d| &d.antonyms),
        source_urls: entry.source_urls,
        license: entry.license,
        word: entry.word,
    })
}

fn extract_phonetics(phonetics: &[RawPhonetic]) -> Vec<Phonetic> {
    phonetics
        .iter()
        .filter_map(|p| {
            let text = non_empty(p.text.as_ref());
            let audio = non_empty(p.audio.as_ref());
            if text.is_none() && audio.is_none() {
                return None;
            }

            Some(Phonetic {
                region: detect_region(audio.as_deref()),
                text,
                audio,
                source_url: p.source_url.clone(),
                license: p.license.clone(),
            })
        })
        .collect()
}

fn extract_meanings(meanings: &[RawMeaning]) -> Vec<Meaning> {
    meanings
        .iter()
        .map(|meaning| Meaning {
            part_of_speech: meaning.part_of_speech.clone(),
            definitions: meaning
                .definitions
                .iter()
                .map(|d| Definition {
                    definition: d.definition.clone(),
                    example: non_empty(d.example.as_ref()),
                    synonyms: d.synonyms.clone(),
                    antonyms: d.antonyms.clone(),
                })
                .collect(),
            synonyms: meaning.synonyms.clone(),
            antonyms: meaning.antonyms.clone(),
        })
        .collect()
}

fn extract_legacy_definitions(meanings: &[RawMeaning]) -> Vec<LegacyDefinition> {
    let mut definitions = Vec::new();

    for meaning in meanings.iter().take(LEGACY_PARTS_OF_SPEECH) {
        for d in meaning.definitions.iter().take(LEGACY_DEFINITIONS_PER_PART) {
            definitions.push(LegacyDefinition {
                part_of_speech: meaning.part_of_speech.clone(),
                definition: d.definition.clone(),
                example: d.example.clone().unwrap_or_default(),
                synonyms: meaning.synonyms.iter().take(LEGACY_RELATED_WORDS).cloned().collect(),
                antonyms: meaning.antonyms.iter().take(LEGACY_RELATED_WORDS).cloned().collect(),
            });
        }
    }

    definitions
}

/// Union of meaning-level and definition-level lists, first occurrence wins
fn collect_unique(
    meanings: &[RawMeaning],
    meaning_level: impl Fn(&RawMeaning) -> &Vec<String>,
    definition_level: impl Fn(&crate::api::RawDefinition) -> &Vec<String>,
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for meaning in meanings {
        let words = meaning_level(meaning)
            .iter()
            .chain(meaning.definitions.iter().flat_map(&definition_level));
        for word in words {
            if seen.insert(word.as_str()) {
                out.push(word.clone());
            }
        }
    }

    out
}
