//! Authorized operations over the per-category location collections.
//!
//! Every write is load → mutate → replace-all under the category's writer
//! lock, reading through [`RecordStore::try_load`] so an unreadable
//! collection fails the write instead of being replaced. Protected
//! operations check the [`AuthContext`] before touching the store.

use chrono::{Local, Utc};
use locmap_core::auth::AuthContext;
use locmap_core::category::Category;
use locmap_core::location::{Location, LocationInput};
use locmap_core::mutation::{apply_create, apply_delete, apply_update};
use locmap_core::snapshot::LocationSnapshot;

use crate::error::DbError;
use crate::models::transfer::{BackupReceipt, ExportBundle, ImportSummary, TransferSummary};
use crate::store::RecordStore;

/// Provides CRUD and bulk transfer for location records.
pub struct LocationRepo;

impl LocationRepo {
    // -----------------------------------------------------------------------
    // Per-category CRUD
    // -----------------------------------------------------------------------

    /// All records of `category` in stored order.
    pub async fn list(
        store: &dyn RecordStore,
        auth: &AuthContext,
        category: Category,
    ) -> Result<Vec<Location>, DbError> {
        auth.require()?;
        Ok(store.load(category).await)
    }

    /// Validate `input`, assign an id, and append the new record.
    pub async fn create(
        store: &dyn RecordStore,
        auth: &AuthContext,
        category: Category,
        input: LocationInput,
    ) -> Result<Location, DbError> {
        auth.require()?;
        let _guard = store.write_lock(category).await;

        let mut records = store.try_load(category).await?;
        let created = apply_create(category, &mut records, input, Local::now().date_naive())?;
        store.replace_all(category, &records).await?;

        Ok(created)
    }

    /// Merge `input` onto the record with `id`. Storage is not written when
    /// the record does not exist or the input is invalid.
    pub async fn update(
        store: &dyn RecordStore,
        auth: &AuthContext,
        category: Category,
        id: &str,
        input: LocationInput,
    ) -> Result<Location, DbError> {
        auth.require()?;
        let _guard = store.write_lock(category).await;

        let mut records = store.try_load(category).await?;
        let updated = apply_update(category, &mut records, id, input)?;
        store.replace_all(category, &records).await?;

        Ok(updated)
    }

    /// Remove the record with `id`, returning it.
    pub async fn delete(
        store: &dyn RecordStore,
        auth: &AuthContext,
        category: Category,
        id: &str,
    ) -> Result<Location, DbError> {
        auth.require()?;
        let _guard = store.write_lock(category).await;

        let mut records = store.try_load(category).await?;
        let removed = apply_delete(category, &mut records, id)?;
        store.replace_all(category, &records).await?;

        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Read views
    // -----------------------------------------------------------------------

    /// Every collection, for the public map and statistics.
    pub async fn snapshot(store: &dyn RecordStore) -> LocationSnapshot {
        store.load_all().await
    }

    // -----------------------------------------------------------------------
    // Bulk transfer
    // -----------------------------------------------------------------------

    pub async fn export_all(
        store: &dyn RecordStore,
        auth: &AuthContext,
    ) -> Result<ExportBundle, DbError> {
        auth.require()?;
        let data = store.try_load_all().await?;

        Ok(ExportBundle {
            exported_at: Utc::now(),
            summary: TransferSummary::of(&data),
            data,
        })
    }

    /// Write every collection to a new file under the backup directory.
    pub async fn backup(
        store: &dyn RecordStore,
        auth: &AuthContext,
    ) -> Result<BackupReceipt, DbError> {
        let bundle = Self::export_all(store, auth).await?;
        let file = store.write_backup(&bundle).await?;

        Ok(BackupReceipt {
            file,
            created_at: bundle.exported_at,
            summary: bundle.summary,
        })
    }

    /// Replace every collection with the payload's. A category missing from
    /// the payload is replaced with an empty collection.
    ///
    /// Categories are written one after another; a failure part-way leaves
    /// the earlier categories replaced.
    pub async fn import_all(
        store: &dyn RecordStore,
        auth: &AuthContext,
        mut payload: LocationSnapshot,
    ) -> Result<ImportSummary, DbError> {
        auth.require()?;

        let mut imported = LocationSnapshot::new();
        for category in Category::ALL {
            let records = payload.take(category);
            let _guard = store.write_lock(category).await;
            store.replace_all(category, &records).await?;
            imported.insert(category, records);
        }

        Ok(TransferSummary::of(&imported))
    }
}
