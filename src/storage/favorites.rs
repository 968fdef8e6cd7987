//! Per-user saved translations
//!
//! A deduplicated set of translation pairs the user explicitly starred.
//! Identity is the case-insensitive English key only; the Igbo side plays
//! no part in the duplicate check.

use crate::normalize;
use crate::storage::{Storage, favorites_key, read_records, write_records};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A starred translation pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: i64,
    pub english: String,
    pub igbo: String,
    /// ISO-8601 creation time
    pub timestamp: String,
}

/// One user's favorites partition.
pub struct FavoritesSet {
    store: Arc<dyn Storage>,
    key: String,
}

impl FavoritesSet {
    pub fn new(store: Arc<dyn Storage>, user_id: &str) -> Self {
        FavoritesSet {
            store,
            key: favorites_key(user_id),
        }
    }

    /// Save a pair. Returns `false` without error on empty input or when a
    /// favorite with the same normalized English key already exists; both
    /// are guard clauses, not failures.
    pub fn add(&self, english: &str, igbo: &str) -> bool {
        let english = english.trim();
        let igbo = igbo.trim();
        if english.is_empty() || igbo.is_empty() {
            return false;
        }

        let mut items = self.list();
        let probe = normalize(english);
        if items.iter().any(|item| normalize(&item.english) == probe) {
            return false;
        }

        items.push(FavoriteItem {
            id: next_id(&items),
            english: english.to_string(),
            igbo: igbo.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        });
        write_records(self.store.as_ref(), &self.key, &items);
        true
    }

    /// Remove a favorite by id. Unknown ids are a no-op.
    pub fn remove(&self, id: i64) {
        let items: Vec<FavoriteItem> = self
            .list()
            .into_iter()
            .filter(|item| item.id != id)
            .collect();
        write_records(self.store.as_ref(), &self.key, &items);
    }

    pub fn list(&self) -> Vec<FavoriteItem> {
        read_records(self.store.as_ref(), &self.key)
    }
}

/// Millisecond timestamp clamped strictly above every id already in the
/// partition, so `remove(id)` always targets exactly one item even when
/// several are added within the same millisecond.
fn next_id(items: &[FavoriteItem]) -> i64 {
    let newest = items.iter().map(|item| item.id).max().unwrap_or(0);
    Utc::now().timestamp_millis().max(newest + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn favorites() -> FavoritesSet {
        FavoritesSet::new(Arc::new(MemoryStore::new()), "1")
    }

    #[test]
    fn test_add_and_list() {
        let set = favorites();
        assert!(set.add("hello", "ndewo"));

        let items = set.list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].english, "hello");
        assert_eq!(items[0].igbo, "ndewo");
    }

    #[test]
    fn test_duplicate_is_case_insensitive_on_english_only() {
        let set = favorites();
        assert!(set.add("Hello", "ndewo"));
        // Same key, different casing and even a different Igbo value
        assert!(!set.add("hello", "ndeewo"));
        assert!(!set.add("  HELLO  ", "ndewo"));
        assert_eq!(set.list().len(), 1);
    }

    #[test]
    fn test_empty_sides_are_rejected_silently() {
        let set = favorites();
        assert!(!set.add("", "ndewo"));
        assert!(!set.add("hello", ""));
        assert!(!set.add("   ", "   "));
        assert!(set.list().is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let set = favorites();
        set.add("hello", "ndewo");
        set.add("water", "mmiri");

        let id = set.list()[0].id;
        set.remove(id);

        let items = set.list();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].english, "water");
    }

    #[test]
    fn test_rapid_adds_get_distinct_ids() {
        let set = favorites();
        set.add("hello", "ndewo");
        set.add("water", "mmiri");
        set.add("food", "nri");

        let items = set.list();
        assert_eq!(items.len(), 3);
        assert!(items[0].id < items[1].id);
        assert!(items[1].id < items[2].id);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let set = favorites();
        set.add("hello", "ndewo");
        set.remove(-42);
        assert_eq!(set.list().len(), 1);
    }

    #[test]
    fn test_partitions_are_isolated_per_user() {
        let store: Arc<dyn Storage> = Arc::new(MemoryStore::new());
        let set_a = FavoritesSet::new(Arc::clone(&store), "1");
        let set_b = FavoritesSet::new(Arc::clone(&store), "2");

        set_a.add("hello", "ndewo");
        assert!(set_b.list().is_empty());
        // Not a duplicate for the other user
        assert!(set_b.add("hello", "ndewo"));
    }

    #[test]
    fn test_readd_after_remove() {
        let set = favorites();
        set.add("hello", "ndewo");
        set.remove(set.list()[0].id);
        assert!(set.add("hello", "ndewo"));
    }
}
