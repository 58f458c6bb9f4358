//! Collection Store - Crash-safe JSON Collection Persistence
//!
//! Each collection is one JSON array file under the data directory,
//! written atomically (tmp file, then rename) so a crash mid-write can
//! never leave a truncated or half-serialized file behind. Missing or
//! corrupt files are replaced with deterministic seed content.

pub mod collection;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::{error, info};

use crate::domain::records::{Nomination, Pledge, Postcard, Wish};
use crate::domain::seeds;

pub use collection::JsonCollection;

/// Reason-coded failure from a store operation.
///
/// The store never panics and never propagates raw I/O errors past its
/// boundary; callers decide whether to log, retry, or surface these.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data directory could not be created.
    #[error("failed to create data directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The records could not be serialized to JSON.
    #[error("failed to serialize '{collection}' records: {source}")]
    Serialize {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    /// The temporary sibling file could not be written.
    #[error("failed to write temp file {path:?}: {source}")]
    WriteTemp {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The atomic rename onto the real path failed.
    #[error("failed to rename {from:?} onto {to:?}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The four tribute collections, each a typed [`JsonCollection`].
///
/// Owns the on-disk representation exclusively; callers only ever see
/// in-memory record vectors.
pub struct CollectionStore {
    /// Wishing-wall messages (append-only).
    pub wishes: JsonCollection<Wish>,
    /// Pledge-wall commitments (append-only).
    pub pledges: JsonCollection<Pledge>,
    /// Nominations (upserted by id at the caller level).
    pub nominations: JsonCollection<Nomination>,
    /// Digital postcards (append-only).
    pub postcards: JsonCollection<Postcard>,
    /// Resolved data directory holding all backing files.
    data_dir: PathBuf,
}

impl CollectionStore {
    /// Create a store rooted at the given data directory.
    ///
    /// No I/O happens here; the directory and files are created lazily
    /// on first access, or eagerly by [`CollectionStore::initialize`].
    pub fn new(data_dir: &Path) -> Self {
        Self {
            wishes: JsonCollection::new(data_dir, "wishes", seeds::wish_seeds),
            pledges: JsonCollection::new(data_dir, "pledges", seeds::pledge_seeds),
            nominations: JsonCollection::new(data_dir, "nominations", seeds::nomination_seeds),
            postcards: JsonCollection::new(data_dir, "postcards", seeds::postcard_seeds),
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Validate or repair every backing file at startup.
    ///
    /// Reads each collection once, which seeds missing files and
    /// replaces corrupt ones. A failure to create the data directory is
    /// logged but not fatal: reads degrade to in-memory seed content.
    pub async fn initialize(&self) {
        if let Err(e) = self.wishes.ensure_ready().await {
            error!(error = %e, "Data directory unavailable, degrading to in-memory defaults");
        }

        info!(count = self.wishes.read().await.len(), collection = "wishes", "Collection ready");
        info!(count = self.pledges.read().await.len(), collection = "pledges", "Collection ready");
        info!(
            count = self.nominations.read().await.len(),
            collection = "nominations",
            "Collection ready"
        );
        info!(
            count = self.postcards.read().await.len(),
            collection = "postcards",
            "Collection ready"
        );
    }

    /// Check that the data directory is writable.
    pub async fn is_healthy(&self) -> bool {
        let probe = self.data_dir.join(".health_check");
        let result = fs::write(&probe, b"ok").await;
        let _ = fs::remove_file(&probe).await;
        result.is_ok()
    }
}
