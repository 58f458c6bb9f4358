//! A single typed, file-backed JSON collection.
//!
//! Write path: serialize pretty-printed, write `<name>.json.tmp`, rename
//! onto `<name>.json`. The rename is the only step that makes new content
//! visible, so readers observe either the old file or the new one, never
//! a partial write.
//!
//! Read path is self-healing: a missing file is seeded, an empty or
//! unparsable file is overwritten with seed content, and an unreadable
//! file degrades to in-memory seeds without touching the disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::StoreError;

/// One named collection persisted as a JSON array file.
///
/// A per-collection mutex serializes every read-modify-write sequence,
/// so two concurrent appends cannot overwrite each other's records
/// (last-write-wins loss is the classic hazard of unlocked
/// read-then-rewrite persistence).
pub struct JsonCollection<T> {
    /// Collection name; also the file stem.
    name: &'static str,
    /// Data directory containing the backing file.
    dir: PathBuf,
    /// Path to `<name>.json`.
    path: PathBuf,
    /// Temporary sibling path for atomic writes.
    tmp_path: PathBuf,
    /// Default content used to initialize or repair the file.
    seed: fn() -> Vec<T>,
    /// Serializes read-modify-write sequences for this collection.
    lock: Mutex<()>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a collection handle; no I/O until first access.
    pub fn new(dir: &Path, name: &'static str, seed: fn() -> Vec<T>) -> Self {
        Self {
            name,
            dir: dir.to_path_buf(),
            path: dir.join(format!("{name}.json")),
            tmp_path: dir.join(format!("{name}.json.tmp")),
            seed,
            lock: Mutex::new(()),
        }
    }

    /// Collection name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the data directory exists, creating parents as needed.
    pub async fn ensure_ready(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StoreError::CreateDir {
                path: self.dir.clone(),
                source,
            })
    }

    /// Read all records. Never fails: missing or broken files are
    /// seeded/repaired, and an unreadable disk degrades to in-memory
    /// seed content.
    pub async fn read(&self) -> Vec<T> {
        let _guard = self.lock.lock().await;
        self.load_unlocked().await
    }

    /// Replace the full collection content atomically.
    pub async fn write(&self, records: &[T]) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.store_unlocked(records).await
    }

    /// Run a read-modify-write sequence under the collection lock.
    ///
    /// The closure's return value is handed back after the modified
    /// records have been durably persisted.
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> Result<R, StoreError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load_unlocked().await;
        let out = f(&mut records);
        self.store_unlocked(&records).await?;
        Ok(out)
    }

    /// Append one record, returning the new collection length.
    pub async fn append(&self, record: T) -> Result<usize, StoreError> {
        self.mutate(move |records| {
            records.push(record);
            records.len()
        })
        .await
    }

    async fn load_unlocked(&self) -> Vec<T> {
        if let Err(e) = self.ensure_ready().await {
            warn!(collection = self.name, error = %e, "Data directory unavailable, returning defaults");
            return (self.seed)();
        }

        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                if content.trim().is_empty() {
                    warn!(collection = self.name, "Backing file is empty, reseeding");
                    return self.reseed_unlocked().await;
                }
                match serde_json::from_str(&content) {
                    Ok(records) => records,
                    Err(e) => {
                        warn!(
                            collection = self.name,
                            error = %e,
                            "Backing file contains invalid content, repairing with defaults"
                        );
                        self.reseed_unlocked().await
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(collection = self.name, "No backing file, seeding with defaults");
                self.reseed_unlocked().await
            }
            Err(e) => {
                warn!(collection = self.name, error = %e, "Backing file unreadable, returning defaults");
                (self.seed)()
            }
        }
    }

    /// Overwrite the file with seed content (best effort) and return it.
    async fn reseed_unlocked(&self) -> Vec<T> {
        let records = (self.seed)();
        if let Err(e) = self.store_unlocked(&records).await {
            warn!(collection = self.name, error = %e, "Failed to persist seed data");
        }
        records
    }

    async fn store_unlocked(&self, records: &[T]) -> Result<(), StoreError> {
        self.ensure_ready().await?;

        let json =
            serde_json::to_string_pretty(records).map_err(|source| StoreError::Serialize {
                collection: self.name,
                source,
            })?;

        fs::write(&self.tmp_path, &json)
            .await
            .map_err(|source| StoreError::WriteTemp {
                path: self.tmp_path.clone(),
                source,
            })?;

        // Atomic rename: the only step that makes new content visible.
        fs::rename(&self.tmp_path, &self.path)
            .await
            .map_err(|source| StoreError::Rename {
                from: self.tmp_path.clone(),
                to: self.path.clone(),
                source,
            })?;

        debug!(collection = self.name, count = records.len(), "Collection persisted");
        Ok(())
    }
}
