//! Whole-collection record store.
//!
//! Each category is one JSON array on disk. Writes replace the whole file.
//! There is no partial-update path.
//!
//! Two read paths exist: [`RecordStore::load`] never fails and backs the
//! public views, [`RecordStore::try_load`] surfaces unreadable data and backs
//! every write so a damaged file is never overwritten.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use locmap_core::category::Category;
use locmap_core::location::Location;
use locmap_core::snapshot::LocationSnapshot;
use tokio::io::AsyncWriteExt;
use tokio::sync::{Mutex, MutexGuard};

use crate::error::DbError;
use crate::models::transfer::ExportBundle;

/// Subdirectory of the data root holding backups.
pub const BACKUP_DIR: &str = "backups";

/// Load / replace-all contract over per-category collections.
///
/// Callers that mutate must hold [`RecordStore::write_lock`] for the
/// category across the whole load → mutate → replace cycle.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Current records of `category`. An absent collection is empty; an
    /// unreadable or malformed one is an error.
    async fn try_load(&self, category: Category) -> Result<Vec<Location>, DbError>;

    /// Current records of `category`. Never fails; unreadable data is empty.
    async fn load(&self, category: Category) -> Vec<Location> {
        match self.try_load(category).await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(%category, error = %e, "Unreadable collection, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace the whole collection of `category`.
    async fn replace_all(&self, category: Category, records: &[Location]) -> Result<(), DbError>;

    /// Exclusive writer access to `category` within this process.
    async fn write_lock(&self, category: Category) -> MutexGuard<'_, ()>;

    /// Persist `bundle` as a new backup, returning its name relative to the
    /// store root.
    async fn write_backup(&self, bundle: &ExportBundle) -> Result<String, DbError>;

    /// Records of every category.
    async fn load_all(&self) -> LocationSnapshot {
        let mut snapshot = LocationSnapshot::new();
        for category in Category::ALL {
            snapshot.insert(category, self.load(category).await);
        }
        snapshot
    }

    /// Records of every category, failing on the first unreadable one.
    async fn try_load_all(&self) -> Result<LocationSnapshot, DbError> {
        let mut snapshot = LocationSnapshot::new();
        for category in Category::ALL {
            snapshot.insert(category, self.try_load(category).await?);
        }
        Ok(snapshot)
    }
}

/// JSON files under a data directory, one per category.
#[derive(Debug)]
pub struct JsonStore {
    root: PathBuf,
    write_locks: HashMap<Category, Mutex<()>>,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            write_locks: Category::ALL
                .into_iter()
                .map(|c| (c, Mutex::new(())))
                .collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `category`, e.g. `<root>/gold-stores.json`.
    pub fn path_for(&self, category: Category) -> PathBuf {
        self.root.join(format!("{}.json", category.slug()))
    }
}

#[async_trait]
impl RecordStore for JsonStore {
    async fn try_load(&self, category: Category) -> Result<Vec<Location>, DbError> {
        let path = self.path_for(category);

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(%category, path = %path.display(), "No collection file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn replace_all(&self, category: Category, records: &[Location]) -> Result<(), DbError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        write_atomic(&self.root, &self.path_for(category), &bytes).await?;

        tracing::debug!(%category, count = records.len(), "Collection replaced");
        Ok(())
    }

    async fn write_lock(&self, category: Category) -> MutexGuard<'_, ()> {
        // Every category is inserted in `new`.
        self.write_locks[&category].lock().await
    }

    async fn write_backup(&self, bundle: &ExportBundle) -> Result<String, DbError> {
        let name = format!(
            "{BACKUP_DIR}/backup-{}.json",
            bundle.exported_at.format("%Y%m%dT%H%M%S%.3fZ")
        );
        let bytes = serde_json::to_vec_pretty(bundle)?;
        write_atomic(&self.root.join(BACKUP_DIR), &self.root.join(&name), &bytes).await?;

        tracing::info!(backup = %name, total = bundle.summary.total, "Backup written");
        Ok(name)
    }
}

/// Write `<file>.tmp`, sync it, then rename it over `path`, so a crash
/// mid-write leaves the previous file intact.
async fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), DbError> {
    let tmp_path = path.with_extension("json.tmp");

    tokio::fs::create_dir_all(dir).await?;

    let mut file = tokio::fs::File::create(&tmp_path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    drop(file);

    tokio::fs::rename(&tmp_path, path).await?;
    Ok(())
}
