//! Bulk export / import payloads.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use locmap_core::category::Category;
use locmap_core::snapshot::LocationSnapshot;
use serde::Serialize;

/// Per-category record counts of a bulk transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferSummary {
    pub counts: BTreeMap<Category, usize>,
    pub total: usize,
}

impl TransferSummary {
    pub fn of(snapshot: &LocationSnapshot) -> Self {
        Self {
            counts: snapshot.counts(),
            total: snapshot.total(),
        }
    }
}

/// Every collection at export time.
#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle {
    pub exported_at: DateTime<Utc>,
    pub data: LocationSnapshot,
    pub summary: TransferSummary,
}

/// A backup written next to the collections.
#[derive(Debug, Clone, Serialize)]
pub struct BackupReceipt {
    /// Path relative to the data directory, e.g. `backups/backup-20261019T101500.000Z.json`.
    pub file: String,
    pub created_at: DateTime<Utc>,
    pub summary: TransferSummary,
}

/// Result of a bulk import.
pub type ImportSummary = TransferSummary;
