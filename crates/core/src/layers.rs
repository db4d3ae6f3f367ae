//! Map overlay composition.
//!
//! Splits a snapshot into named, independently toggleable layers: one
//! active layer per category (shown by default) and one future-cohort layer
//! per category and requested year (hidden by default). Labels carry the
//! member count of the snapshot they were built from.

use serde::Serialize;

use crate::category::Category;
use crate::classify::{classify, is_future_cohort, Classification, StateBucket};
use crate::icons::{resolve_icon, AssetCatalog, MarkerIcon};
use crate::location::Location;
use crate::snapshot::LocationSnapshot;

// ---------------------------------------------------------------------------
// Viewport defaults
// ---------------------------------------------------------------------------

/// Initial map center (latitude, longitude).
pub const DEFAULT_CENTER: (f64, f64) = (9.7489, -83.7534);

/// Initial zoom level.
pub const DEFAULT_ZOOM: u8 = 8;

/// Corner where the layer toggle control is drawn.
pub const LAYER_CONTROL_POSITION: &str = "topleft";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayerKind {
    Active,
    FutureCohort { year: i32 },
}

/// One overlay group ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedLayer {
    /// Stable identifier, e.g. `gold-stores-future-2026`.
    pub key: String,
    /// Display label with the live member count, e.g. `Gold Stores (12)`.
    pub label: String,
    pub category: Category,
    pub kind: LayerKind,
    pub visible_by_default: bool,
    pub records: Vec<Location>,
}

impl NamedLayer {
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id.as_str()).collect()
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Build all layers for `snapshot`.
///
/// Output order is category z-order; within a category the active layer
/// comes first, then one cohort layer per entry of `cohort_years` in the
/// order given.
pub fn compose_layers(snapshot: &LocationSnapshot, cohort_years: &[i32]) -> Vec<NamedLayer> {
    let mut layers = Vec::with_capacity(Category::ALL.len() * (1 + cohort_years.len()));

    for (category, records) in snapshot.iter() {
        layers.push(active_layer(category, records));
        for &year in cohort_years {
            layers.push(cohort_layer(category, records, year));
        }
    }

    layers
}

fn active_layer(category: Category, records: &[Location]) -> NamedLayer {
    let members: Vec<Location> = records
        .iter()
        .filter(|r| StateBucket::of(&r.state) == StateBucket::Active)
        .cloned()
        .collect();

    NamedLayer {
        key: format!("{}-active", category.slug()),
        label: format!("{} ({})", category.label(), members.len()),
        category,
        kind: LayerKind::Active,
        visible_by_default: true,
        records: members,
    }
}

fn cohort_layer(category: Category, records: &[Location], year: i32) -> NamedLayer {
    let members: Vec<Location> = records
        .iter()
        .filter(|r| is_future_cohort(r, year))
        .cloned()
        .collect();

    NamedLayer {
        key: format!("{}-future-{year}", category.slug()),
        label: format!("{} opening {year} ({})", category.label(), members.len()),
        category,
        kind: LayerKind::FutureCohort { year },
        visible_by_default: false,
        records: members,
    }
}

// ---------------------------------------------------------------------------
// Render payload
// ---------------------------------------------------------------------------

/// A record with its classification and resolved icon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    #[serde(flatten)]
    pub location: Location,
    pub classification: Classification,
    pub icon: MarkerIcon,
}

/// A layer with its records expanded to markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayer {
    pub key: String,
    pub label: String,
    pub category: Category,
    pub kind: LayerKind,
    pub visible_by_default: bool,
    pub markers: Vec<Marker>,
}

/// Everything the map renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: (f64, f64),
    pub zoom: u8,
    pub layer_control_position: &'static str,
    pub layer_control_collapsed: bool,
    pub layers: Vec<MapLayer>,
}

/// Compose layers and resolve every marker icon against `catalog`.
pub fn build_map_view(
    snapshot: &LocationSnapshot,
    cohort_years: &[i32],
    catalog: &dyn AssetCatalog,
) -> MapView {
    let layers = compose_layers(snapshot, cohort_years)
        .into_iter()
        .map(|layer| {
            let category = layer.category;
            let markers = layer
                .records
                .into_iter()
                .map(|location| {
                    let classification = classify(category, &location);
                    Marker {
                        icon: resolve_icon(classification.icon, catalog),
                        classification,
                        location,
                    }
                })
                .collect();
            MapLayer {
                key: layer.key,
                label: layer.label,
                category,
                kind: layer.kind,
                visible_by_default: layer.visible_by_default,
                markers,
            }
        })
        .collect();

    MapView {
        center: DEFAULT_CENTER,
        zoom: DEFAULT_ZOOM,
        layer_control_position: LAYER_CONTROL_POSITION,
        layer_control_collapsed: false,
        layers,
    }
}
