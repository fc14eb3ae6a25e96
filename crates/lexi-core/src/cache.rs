use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// Bounded map that evicts the oldest inserted key when full.
///
/// Reads never change eviction order.
#[derive(Debug)]
pub struct FifoCache<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats<K> {
    pub size: usize,
    pub max_size: usize,
    /// Keys, oldest first
    pub entries: Vec<K>,
}

impl<K, V> FifoCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert a value, returning the evicted key if the cache was full.
    ///
    /// Replacing an existing key keeps its original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<K> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return None;
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                evicted = Some(oldest);
            }
        }

        self.order.push_back(key.clone());
        self.entries.insert(key, value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn stats(&self) -> CacheStats<K> {
        CacheStats {
            size: self.entries.len(),
            max_size: self.capacity,
            entries: self.order.iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_earliest_inserted_when_full() {
        let mut cache = FifoCache::new(3);
        assert_eq!(cache.insert("a", 1), None);
        assert_eq!(cache.insert("b", 2), None);
        assert_eq!(cache.insert("c", 3), None);

        assert_eq!(cache.insert("d", 4), Some("a"));
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains_key(&"a"));
        assert_eq!(cache.stats().entries, ["b", "c", "d"]);
    }

    #[test]
    fn reads_do_not_refresh_order() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.insert("c", 3), Some("a"));
        assert_eq!(cache.get(&"a"), None);
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let mut cache = FifoCache::new(100);
        for i in 0..1_000 {
            cache.insert(i, i * 2);
            assert!(cache.len() <= 100);
        }
        assert_eq!(cache.len(), 100);
        assert_eq!(cache.stats().entries.first(), Some(&900));
    }

    #[test]
    fn replacing_a_key_keeps_its_slot() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.insert("a", 10), None);
        assert_eq!(cache.get(&"a"), Some(&10));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.insert("c", 3), Some("a"));
    }

    #[test]
    fn negative_entries_are_distinct_from_misses() {
        let mut cache: FifoCache<String, Option<u32>> = FifoCache::new(4);
        cache.insert("missing".to_string(), None);

        assert_eq!(cache.get(&"missing".to_string()), Some(&None));
        assert_eq!(cache.get(&"unseen".to_string()), None);
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache = FifoCache::new(0);
        assert_eq!(cache.insert("a", 1), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_resets_stats() {
        let mut cache = FifoCache::new(2);
        cache.insert("a", 1);
        cache.clear();

        let stats = cache.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.max_size, 2);
        assert!(stats.entries.is_empty());
    }
}
