//! Video metadata pass-through
//!
//! The upload/storage backend owns these records; the core only ferries
//! them through the persistence layer under a single global key. Field
//! names stay in their camelCase wire form so existing persisted data keeps
//! deserializing.

use crate::storage::{Storage, VIDEOS_KEY, read_records, write_records};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Opaque video record. Not validated beyond its JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub thumbnail: String,
    pub uploaded_by: String,
    pub upload_date: String,
    pub category: String,
}

/// The shared (not per-user) video list.
pub struct VideoLibrary {
    store: Arc<dyn Storage>,
}

impl VideoLibrary {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        VideoLibrary { store }
    }

    pub fn add(&self, video: VideoItem) {
        let mut videos = self.list();
        videos.push(video);
        write_records(self.store.as_ref(), VIDEOS_KEY, &videos);
    }

    pub fn remove(&self, id: i64) {
        let videos: Vec<VideoItem> = self
            .list()
            .into_iter()
            .filter(|video| video.id != id)
            .collect();
        write_records(self.store.as_ref(), VIDEOS_KEY, &videos);
    }

    pub fn list(&self) -> Vec<VideoItem> {
        read_records(self.store.as_ref(), VIDEOS_KEY)
    }
}
