//! File-backed key-value store
//!
//! One JSON file per logical key inside a dedicated directory. Writes go
//! through a temp file and an atomic rename so a crash mid-write never
//! leaves a half-written partition behind.

use crate::storage::Storage;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::warn;

/// Durable store rooted at a directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    /// Map a logical key like `history:42` to a filesystem-safe file name.
    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        self.dir.join(format!("{}.json", name))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(key, "Failed to read partition file: {}", e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let result = (|| -> Result<(), std::io::Error> {
            let mut temp = NamedTempFile::new_in(&self.dir)?;
            temp.write_all(value.as_bytes())?;
            temp.persist(self.path_for(key))?;
            Ok(())
        })();
        if let Err(e) = result {
            warn!(key, "Failed to write partition file: {}", e);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.path_for(key)) {
            if e.kind() != ErrorKind::NotFound {
                warn!(key, "Failed to remove partition file: {}", e);
            }
        }
    }
}
