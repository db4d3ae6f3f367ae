//! A point-in-time copy of every category's records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::location::Location;

/// Records of all categories, keyed by category in z-order.
///
/// Categories that were never inserted read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationSnapshot {
    collections: BTreeMap<Category, Vec<Location>>,
}

impl LocationSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, records: Vec<Location>) {
        self.collections.insert(category, records);
    }

    pub fn with(mut self, category: Category, records: Vec<Location>) -> Self {
        self.insert(category, records);
        self
    }

    /// Records of `category`; empty when absent.
    pub fn records(&self, category: Category) -> &[Location] {
        self.collections
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Take ownership of one category's records, leaving it empty.
    pub fn take(&mut self, category: Category) -> Vec<Location> {
        self.collections.remove(&category).unwrap_or_default()
    }

    /// `(category, records)` for all four categories in z-order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Location])> {
        Category::ALL.into_iter().map(move |c| (c, self.records(c)))
    }

    /// Record count per category, every category present.
    pub fn counts(&self) -> BTreeMap<Category, usize> {
        self.iter().map(|(c, records)| (c, records.len())).collect()
    }

    pub fn total(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }
}
