//! Persistence for the location directory.
//!
//! Collections live as JSON files under a data directory. See
//! [`store::RecordStore`] for the load / replace-all contract and
//! [`repositories::LocationRepo`] for the authorized operations built on it.

use std::path::PathBuf;

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::DbError;
pub use store::{JsonStore, RecordStore};

/// Open the store rooted at `data_dir`, creating the directory if needed.
pub async fn open_store(data_dir: impl Into<PathBuf>) -> Result<JsonStore, DbError> {
    let store = JsonStore::new(data_dir);
    tokio::fs::create_dir_all(store.root()).await?;
    Ok(store)
}

/// Check that the data directory exists and is a directory.
pub async fn health_check(store: &JsonStore) -> Result<(), DbError> {
    let metadata = tokio::fs::metadata(store.root()).await?;
    if metadata.is_dir() {
        Ok(())
    } else {
        Err(DbError::Io(std::io::Error::other(format!(
            "{} is not a directory",
            store.root().display()
        ))))
    }
}
