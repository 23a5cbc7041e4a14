use parking_lot::Mutex;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Decoded responses keyed by request path.
///
/// Entries never expire; the cache only shrinks through [`ResponseCache::clear`].
/// Clones share the same storage.
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    store: Arc<Mutex<HashMap<String, Value>>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<Value> {
        self.store.lock().get(path).cloned()
    }

    pub fn set(&self, path: &str, value: Value) {
        self.store.lock().insert(path.to_string(), value);
    }

    pub fn contains(&self, path: &str) -> bool {
        self.store.lock().contains_key(path)
    }

    pub fn clear(&self) {
        self.store.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}
