//! Thread-safe memo of resolved type handles.

use std::collections::HashMap;

use parking_lot::Mutex;
use rosloader_core::TypeHandle;

/// Maps identifier strings (raw or normalized) to resolved handles.
///
/// Every operation takes the lock for the duration of a single map access.
/// Two callers resolving the same unseen identifier may both load it; the
/// later [`TypeCache::insert`] replaces the earlier handle.
#[derive(Debug, Default)]
pub struct TypeCache {
    entries: Mutex<HashMap<String, TypeHandle>>,
}

impl TypeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<TypeHandle> {
        self.entries.lock().get(key).cloned()
    }

    pub fn insert(&self, key: impl Into<String>, handle: TypeHandle) {
        self.entries.lock().insert(key.into(), handle);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Snapshot of the cached keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().keys().cloned().collect();
        keys.sort_unstable();
        keys
    }
}
