//! Per-user translation history
//!
//! A bounded, newest-first log of resolved translations. Each ledger is
//! scoped to one user's partition key; switching users means constructing a
//! ledger over a different key, which swaps the visible history without
//! touching anyone else's.

use crate::storage::{Storage, history_key, read_records, write_records};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Retained entries per user unless overridden. One observed deployment
/// never capped; treat that as a configuration choice, not a second code
/// path.
pub const DEFAULT_HISTORY_CAP: usize = 10;

/// A single resolved translation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Creation-timestamp-derived id, strictly increasing within the
    /// partition
    pub id: i64,
    pub english: String,
    pub igbo: String,
    /// ISO-8601 creation time
    pub timestamp: String,
}

/// Append-only-by-policy log of one user's translations.
pub struct HistoryLedger {
    store: Arc<dyn Storage>,
    key: String,
    cap: usize,
}

impl HistoryLedger {
    pub fn new(store: Arc<dyn Storage>, user_id: &str) -> Self {
        Self::with_cap(store, user_id, DEFAULT_HISTORY_CAP)
    }

    /// Create a ledger with an explicit retention cap.
    pub fn with_cap(store: Arc<dyn Storage>, user_id: &str, cap: usize) -> Self {
        HistoryLedger {
            store,
            key: history_key(user_id),
            cap,
        }
    }

    /// Record a resolved translation. The new entry is prepended and the
    /// ledger truncated to the cap, newest retained.
    pub fn append(&self, english: &str, igbo: &str) -> HistoryItem {
        let mut items = self.list();
        let item = HistoryItem {
            id: next_id(&items),
            english: english.to_string(),
            igbo: igbo.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        };

        items.insert(0, item.clone());
        items.truncate(self.cap);
        write_records(self.store.as_ref(), &self.key, &items);

        item
    }

    /// All retained entries, newest first.
    pub fn list(&self) -> Vec<HistoryItem> {
        read_records(self.store.as_ref(), &self.key)
    }

    /// Wipe this user's history partition.
    pub fn clear(&self) {
        self.store.remove(&self.key);
    }
}

/// Millisecond timestamp clamped strictly above every retained id, so ids
/// stay unique in the partition even under clock adjustments or
/// same-millisecond appends.
fn next_id(items: &[HistoryItem]) -> i64 {
    let newest = items.iter().map(|item| item.id).max().unwrap_or(0);
    Utc::now().timestamp_millis().max(newest + 1)
}
