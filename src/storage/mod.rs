/// Storage Module
///
/// Local persistence for the per-user partitions. The interface is a plain
/// key-value string store with localStorage semantics: absent keys read as
/// nothing, writes are last-writer-wins, and every failure path is soft —
/// a corrupt value resets the affected partition to empty instead of
/// propagating an error to the caller.
pub mod favorites;
pub mod file;
pub mod history;
pub mod videos;

pub use favorites::{FavoriteItem, FavoritesSet};
pub use file::FileStore;
pub use history::{DEFAULT_HISTORY_CAP, HistoryItem, HistoryLedger};
pub use videos::{VideoItem, VideoLibrary};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::warn;

/// Key holding the persisted session record.
pub const SESSION_KEY: &str = "session";

/// Key holding the global (not per-user) video metadata list.
pub const VIDEOS_KEY: &str = "videos";

/// Partition key for a user's translation history.
pub fn history_key(user_id: &str) -> String {
    format!("history:{}", user_id)
}

/// Partition key for a user's favorites.
pub fn favorites_key(user_id: &str) -> String {
    format!("favorites:{}", user_id)
}

/// Fail-soft key-value string storage.
///
/// Implementations log their own I/O problems and degrade to "absent" on
/// read errors; callers never see a storage failure.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and ephemeral sessions.
pub struct MemoryStore {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            data: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        MemoryStore::new()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.data.lock() {
            Ok(guard) => guard.get(key).cloned(),
            Err(_) => None,
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.data.lock() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.data.lock() {
            guard.remove(key);
        }
    }
}

/// Read a JSON array of records from a key. Absent key → empty; malformed
/// JSON → warn and reset to empty rather than propagating a parse error.
pub(crate) fn read_records<T: DeserializeOwned>(store: &dyn Storage, key: &str) -> Vec<T> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    match serde_json::from_str(&raw) {
        Ok(records) => records,
        Err(e) => {
            warn!(key, "Resetting malformed partition: {}", e);
            store.remove(key);
            Vec::new()
        }
    }
}

/// Serialize records back to their key. A serialization failure is logged
/// and the previous value is left in place.
pub(crate) fn write_records<T: Serialize>(store: &dyn Storage, key: &str, records: &[T]) {
    match serde_json::to_string(records) {
        Ok(json) => store.set(key, &json),
        Err(e) => warn!(key, "Failed to serialize partition: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        id: i64,
        name: String,
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);

        store.set("k", "v");
        assert_eq!(store.get("k"), Some("v".to_string()));

        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2".to_string()));

        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_partition_keys() {
        assert_eq!(history_key("42"), "history:42");
        assert_eq!(favorites_key("42"), "favorites:42");
    }

    #[test]
    fn test_read_records_absent_key_is_empty() {
        let store = MemoryStore::new();
        let records: Vec<Record> = read_records(&store, "missing");
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_records_malformed_json_resets_partition() {
        let store = MemoryStore::new();
        store.set("bad", "not json at all");

        let records: Vec<Record> = read_records(&store, "bad");
        assert!(records.is_empty());
        assert_eq!(store.get("bad"), None);
    }

    #[test]
    fn test_write_then_read_records() {
        let store = MemoryStore::new();
        let records = vec![Record {
            id: 1,
            name: "hello".to_string(),
        }];
        write_records(&store, "records", &records);

        let back: Vec<Record> = read_records(&store, "records");
        assert_eq!(back, records);
    }
}
