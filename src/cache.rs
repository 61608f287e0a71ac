use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use ahash::AHashMap;
use parking_lot::RwLock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Identifies one complete walk: where it starts and which relations it
/// follows.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WalkKey {
    pub source: String,
    pub allow_all_relations: bool,
    pub filtered_relations: Vec<String>,
}

impl WalkKey {
    pub fn new<S: AsRef<str>>(source: &str, allow_all_relations: bool, filtered: &[S]) -> Self {
        Self {
            source: source.to_string(),
            allow_all_relations,
            filtered_relations: filtered.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}

/// Complete walks (run to exhaustion) keyed by [`WalkKey`].
///
/// Readers share entries through `Arc`, so concurrent similarity queries over
/// the same network can reuse each other's walks.
#[derive(Default)]
pub struct WalkCache {
    inner: RwLock<AHashMap<WalkKey, Arc<Vec<String>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl WalkCache {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AHashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn get(&self, key: &WalkKey) -> Option<Arc<Vec<String>>> {
        if let Some(value) = self.inner.read().get(key).cloned() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            Some(value)
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    pub fn insert(&self, key: WalkKey, walk: Vec<String>) -> Arc<Vec<String>> {
        let walk = Arc::new(walk);
        self.inner.write().insert(key, Arc::clone(&walk));
        walk
    }

    pub fn clear(&self) {
        self.inner.write().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.inner.read().len();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }
}
