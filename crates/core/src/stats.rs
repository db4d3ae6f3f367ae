//! Directory statistics.
//!
//! Every category, state, and requested year is always present in the
//! summary, so an empty or partially unavailable data set yields zeros
//! rather than missing keys.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::Category;
use crate::classify::opens_in_year;
use crate::location::LocationState;
use crate::snapshot::LocationSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    /// Records with state `Active`, per category.
    pub active_counts: BTreeMap<Category, usize>,
    pub total_active: usize,
    /// State histogram over all records, per category.
    pub counts_by_state: BTreeMap<Category, BTreeMap<LocationState, usize>>,
    /// Records whose opening date falls in a year, regardless of state.
    pub future_cohort_counts: BTreeMap<Category, BTreeMap<i32, usize>>,
    /// Unfiltered record count, per category.
    pub raw_totals: BTreeMap<Category, usize>,
    pub total_records: usize,
}

impl StatsSummary {
    /// All-zero summary with every key populated.
    pub fn zeroed(cohort_years: &[i32]) -> Self {
        let per_category = |value: usize| -> BTreeMap<Category, usize> {
            Category::ALL.map(|c| (c, value)).into_iter().collect()
        };
        let state_zeros: BTreeMap<LocationState, usize> =
            LocationState::ALL.map(|s| (s, 0)).into_iter().collect();
        let year_zeros: BTreeMap<i32, usize> = cohort_years.iter().map(|&y| (y, 0)).collect();

        Self {
            active_counts: per_category(0),
            total_active: 0,
            counts_by_state: Category::ALL
                .map(|c| (c, state_zeros.clone()))
                .into_iter()
                .collect(),
            future_cohort_counts: Category::ALL
                .map(|c| (c, year_zeros.clone()))
                .into_iter()
                .collect(),
            raw_totals: per_category(0),
            total_records: 0,
        }
    }
}

pub fn aggregate(snapshot: &LocationSnapshot, cohort_years: &[i32]) -> StatsSummary {
    let mut summary = StatsSummary::zeroed(cohort_years);

    for (category, records) in snapshot.iter() {
        let active = records
            .iter()
            .filter(|r| r.state.effective() == LocationState::Active)
            .count();
        summary.active_counts.insert(category, active);
        summary.total_active += active;

        let histogram = summary.counts_by_state.entry(category).or_default();
        for record in records {
            *histogram.entry(record.state.effective()).or_insert(0) += 1;
        }

        let cohorts = summary.future_cohort_counts.entry(category).or_default();
        for &year in cohort_years {
            let count = records.iter().filter(|r| opens_in_year(r, year)).count();
            cohorts.insert(year, count);
        }

        summary.raw_totals.insert(category, records.len());
        summary.total_records += records.len();
    }

    summary
}
