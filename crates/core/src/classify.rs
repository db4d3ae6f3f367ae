//! Record classification: state bucket, icon, marker hints, and cohort
//! membership.
//!
//! All functions here are pure and depend only on a record's `state` and
//! `opening_date` (plus its category for styling).

use serde::Serialize;

use crate::category::Category;
use crate::icons::IconSelector;
use crate::location::{Location, LocationState};

/// Two-valued bucket derived from the lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateBucket {
    Active,
    Planned,
}

impl StateBucket {
    pub fn of(state: &LocationState) -> Self {
        match state {
            LocationState::Active | LocationState::Unrecognized(_) => Self::Active,
            LocationState::Planned
            | LocationState::UpcomingOpening
            | LocationState::UnderConstruction => Self::Planned,
        }
    }
}

/// Tooltip glyph and status colour shown next to a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarkerHint {
    pub glyph: &'static str,
    pub status_color: &'static str,
}

/// Marker hint for a category in a bucket.
pub fn marker_hint(category: Category, bucket: StateBucket) -> MarkerHint {
    let (glyph, status_color) = match (bucket, category) {
        (StateBucket::Planned, _) => ("📅", "orange"),
        (StateBucket::Active, Category::DistributionCenter) => ("🏭", "green"),
        (StateBucket::Active, Category::Distributor) => ("📦", "green"),
        (StateBucket::Active, Category::GoldStore) => ("🥇", "blue"),
        (StateBucket::Active, Category::SatelliteStore) => ("🛒", "green"),
    };
    MarkerHint {
        glyph,
        status_color,
    }
}

/// Everything the renderer needs to draw one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub bucket: StateBucket,
    pub icon: IconSelector,
    pub hint: MarkerHint,
    pub state_label: &'static str,
}

pub fn classify(category: Category, location: &Location) -> Classification {
    let bucket = StateBucket::of(&location.state);
    Classification {
        bucket,
        icon: IconSelector::new(category, bucket),
        hint: marker_hint(category, bucket),
        state_label: location.state.label(),
    }
}

/// Whether the opening date text starts with `year`.
///
/// Plain prefix match; malformed dates simply do not match.
pub fn opens_in_year(location: &Location, year: i32) -> bool {
    location
        .opening_date
        .as_deref()
        .is_some_and(|date| date.starts_with(&year.to_string()))
}

/// Upcoming-opening records whose opening date falls in `year`.
pub fn is_future_cohort(location: &Location, year: i32) -> bool {
    location.state == LocationState::UpcomingOpening && opens_in_year(location, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::location;

    #[test]
    fn active_bucket() {
        assert_eq!(StateBucket::of(&LocationState::Active), StateBucket::Active);
        assert_eq!(
            StateBucket::of(&LocationState::Unrecognized("cerrado".into())),
            StateBucket::Active
        );
    }

    #[test]
    fn non_active_states_are_planned() {
        for state in [
            LocationState::Planned,
            LocationState::UpcomingOpening,
            LocationState::UnderConstruction,
        ] {
            assert_eq!(StateBucket::of(&state), StateBucket::Planned);
        }
    }

    #[test]
    fn classify_planned_gold_store() {
        let loc = location("TO001", LocationState::UnderConstruction, None);
        let c = classify(Category::GoldStore, &loc);

        assert_eq!(c.bucket, StateBucket::Planned);
        assert_eq!(c.icon.asset_name(), "logo-dorado-activo-next.png");
        assert_eq!(c.hint.status_color, "orange");
        assert_eq!(c.state_label, "Under Construction");
    }

    #[test]
    fn classify_active_gold_store_is_blue() {
        let loc = location("TO002", LocationState::Active, None);
        let c = classify(Category::GoldStore, &loc);

        assert_eq!(c.hint.glyph, "🥇");
        assert_eq!(c.hint.status_color, "blue");
    }

    #[test]
    fn future_cohort_requires_upcoming_state() {
        let planned = location("D001", LocationState::Planned, Some("2026-05-01"));
        let upcoming = location("D002", LocationState::UpcomingOpening, Some("2026-05-01"));

        assert!(!is_future_cohort(&planned, 2026));
        assert!(is_future_cohort(&upcoming, 2026));
    }

    #[test]
    fn future_cohort_requires_matching_year() {
        let loc = location("D002", LocationState::UpcomingOpening, Some("2027-01-15"));
        assert!(!is_future_cohort(&loc, 2026));
        assert!(is_future_cohort(&loc, 2027));
    }

    #[test]
    fn future_cohort_without_date_is_false() {
        let loc = location("D002", LocationState::UpcomingOpening, None);
        assert!(!is_future_cohort(&loc, 2026));
    }

    #[test]
    fn malformed_date_fails_match_quietly() {
        let loc = location("D002", LocationState::UpcomingOpening, Some("marzo 2026"));
        assert!(!is_future_cohort(&loc, 2026));

        // Prefix match only: anything starting with the year counts.
        let loose = location("D003", LocationState::UpcomingOpening, Some("2026/13/45"));
        assert!(is_future_cohort(&loose, 2026));
    }
}
