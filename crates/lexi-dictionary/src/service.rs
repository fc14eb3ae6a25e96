use lexi_core::cache::{CacheStats, FifoCache};
use lexi_core::word::{WordClass, classify_word};
use lexi_types::WordLookupResult;
use tokio::sync::Mutex;

use crate::api::DictionaryApi;
use crate::error::DictionaryError;
use crate::normalize::normalize_entries;

/// Dictionary lookups with a bounded FIFO cache.
///
/// Keys are the words exactly as passed in. Confirmed misses are cached as
/// `None`; failed requests are never cached.
pub struct DictionaryService<A> {
    api: A,
    cache: Mutex<FifoCache<String, Option<WordLookupResult>>>,
}

impl<A: DictionaryApi> DictionaryService<A> {
    pub fn new(api: A, cache_size: usize) -> Self {
        Self {
            api,
            cache: Mutex::new(FifoCache::new(cache_size)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Definition for `word`, or `None` if the dictionary doesn't know it
    pub async fn get_definition(
        &self,
        word: &str,
    ) -> Result<Option<WordLookupResult>, DictionaryError> {
        if word.is_empty() {
            return Err(DictionaryError::InvalidInput);
        }

        if let Some(hit) = self.cache.lock().await.get(&word.to_string()) {
            tracing::debug!("Dictionary cache hit: '{}'", word);
            return Ok(hit.clone());
        }

        // Lock is released during the request; concurrent misses each fetch
        let entries = self
            .api
            .fetch_entries(word)
            .await
            .inspect_err(|e| tracing::error!("Dictionary API error for '{}': {}", word, e))?;

        let result = match entries {
            Some(entries) => normalize_entries(entries),
            None => None,
        };

        if result.is_none() {
            tracing::debug!("No dictionary entry for '{}'", word);
        }

        let evicted = self
            .cache
            .lock()
            .await
            .insert(word.to_string(), result.clone());
        if let Some(evicted) = evicted {
            tracing::debug!("Evicted '{}' from dictionary cache", evicted);
        }

        Ok(result)
    }

    /// Classify a word before lookup
    pub fn is_valid_word(&self, word: &str) -> WordClass {
        classify_word(word)
    }

    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    pub async fn cache_stats(&self) -> CacheStats<String> {
        self.cache.lock().await.stats()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::api::RawEntry;

    enum Reply {
        Found(&'static str),
        NotFound,
        ServerError,
    }

    struct FakeApi {
        replies: HashMap<&'static str, Reply>,
        calls: AtomicUsize,
    }

    impl FakeApi {
        fn new(replies: Vec<(&'static str, Reply)>) -> Self {
            Self {
                replies: replies.into_iter().collect(),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DictionaryApi for FakeApi {
        async fn fetch_entries(
            &self,
            word: &str,
        ) -> Result<Option<Vec<RawEntry>>, DictionaryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.replies.get(word) {
                Some(Reply::Found(json)) => serde_json::from_str(json)
                    .map(Some)
                    .map_err(|e| DictionaryError::Malformed(e.to_string())),
                Some(Reply::ServerError) => Err(DictionaryError::Http { status: 500 }),
                Some(Reply::NotFound) | None => Ok(None),
            }
        }
    }

    const CAT: &str = r#"[{ "word": "cat", "meanings": [
        { "partOfSpeech": "noun", "definitions": [{ "definition": "A small feline." }] }
    ] }]"#;

    #[tokio::test]
    async fn second_lookup_is_a_cache_hit() {
        let service = DictionaryService::new(FakeApi::new(vec![("cat", Reply::Found(CAT))]), 100);

        let first = service.get_definition("cat").await.unwrap().unwrap();
        let second = service.get_definition("cat").await.unwrap().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.meanings[0].definitions[0].definition, "A small feline.");
        assert_eq!(service.api().calls(), 1);
    }

    #[tokio::test]
    async fn not_found_is_negatively_cached() {
        let service = DictionaryService::new(FakeApi::new(vec![("zzxq", Reply::NotFound)]), 100);

        assert_eq!(service.get_definition("zzxq").await.unwrap(), None);
        assert_eq!(service.get_definition("zzxq").await.unwrap(), None);
        assert_eq!(service.api().calls(), 1);
        assert_eq!(service.cache_stats().await.entries, ["zzxq"]);
    }

    #[tokio::test]
    async fn empty_entry_list_is_not_found() {
        let service = DictionaryService::new(FakeApi::new(vec![("void", Reply::Found("[]"))]), 100);

        assert_eq!(service.get_definition("void").await.unwrap(), None);
        assert_eq!(service.get_definition("void").await.unwrap(), None);
        assert_eq!(service.api().calls(), 1);
    }

    #[tokio::test]
    async fn failures_propagate_and_are_not_cached() {
        let service = DictionaryService::new(
            FakeApi::new(vec![
                ("boom", Reply::ServerError),
                ("junk", Reply::Found(r#"{"title": "nope"}"#)),
            ]),
            100,
        );

        assert!(matches!(
            service.get_definition("boom").await,
            Err(DictionaryError::Http { status: 500 })
        ));
        assert!(matches!(
            service.get_definition("boom").await,
            Err(DictionaryError::Http { .. })
        ));
        assert!(matches!(
            service.get_definition("junk").await,
            Err(DictionaryError::Malformed(_))
        ));

        assert_eq!(service.api().calls(), 3);
        assert_eq!(service.cache_stats().await.size, 0);
    }

    #[tokio::test]
    async fn keys_are_case_sensitive() {
        let service = DictionaryService::new(FakeApi::new(vec![]), 100);

        service.get_definition("Cat").await.unwrap();
        service.get_definition("cat").await.unwrap();
        assert_eq!(service.api().calls(), 2);
    }

    #[tokio::test]
    async fn cache_evicts_oldest_lookup() {
        let service = DictionaryService::new(FakeApi::new(vec![]), 2);

        for word in ["one", "two", "three"] {
            service.get_definition(word).await.unwrap();
        }

        let stats = service.cache_stats().await;
        assert_eq!(stats.max_size, 2);
        assert_eq!(stats.entries, ["two", "three"]);

        service.get_definition("one").await.unwrap();
        assert_eq!(service.api().calls(), 4);
    }

    #[tokio::test]
    async fn empty_word_is_rejected_without_a_request() {
        let service = DictionaryService::new(FakeApi::new(vec![]), 2);

        assert!(matches!(
            service.get_definition("").await,
            Err(DictionaryError::InvalidInput)
        ));
        assert_eq!(service.api().calls(), 0);
    }

    #[tokio::test]
    async fn clear_cache_forces_refetch() {
        let service = DictionaryService::new(FakeApi::new(vec![("cat", Reply::Found(CAT))]), 10);

        service.get_definition("cat").await.unwrap();
        service.clear_cache().await;
        service.get_definition("cat").await.unwrap();
        assert_eq!(service.api().calls(), 2);
    }

    #[test]
    fn classification_is_exposed() {
        let service = DictionaryService::new(FakeApi::new(vec![]), 1);
        assert_eq!(service.is_valid_word("don't").kind(), "contraction");
    }
}
