//! Key-value persistence seam.
//!
//! The rewriter never owns storage: the host supplies a store for the
//! identity token and the proxy flag. `MemoryStore` backs tests and hosts
//! that persist elsewhere; `FileStore` keeps a JSON map under the XDG
//! state dir.

mod file;

pub use file::{FileStore, FileStoreError};

use std::collections::HashMap;

/// Host-owned key-value store: string keys and values, infallible access.
pub trait KvStore {
    /// Returns the stored value for `key`, or `default` when absent.
    fn get(&self, key: &str, default: &str) -> String;
    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store backed by a plain map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_returns_default_when_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing", ""), "");
        assert_eq!(store.get("missing", "fallback"), "fallback");
    }

    #[test]
    fn memory_store_set_then_get() {
        let mut store = MemoryStore::new();
        store.set("k", "v1");
        assert_eq!(store.get("k", ""), "v1");
        store.set("k", "v2");
        assert_eq!(store.get("k", ""), "v2");
    }
}
