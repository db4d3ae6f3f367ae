//! Location categories and their fixed per-category properties.
//!
//! Each category owns its own persisted collection, its own id prefix, and
//! its own position in the map's z-order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Id prefix for distribution centers.
pub const PREFIX_DISTRIBUTION_CENTER: &str = "CD";
/// Id prefix for authorized distributors.
pub const PREFIX_DISTRIBUTOR: &str = "D";
/// Id prefix for gold stores.
pub const PREFIX_GOLD_STORE: &str = "TO";
/// Id prefix for satellite stores.
pub const PREFIX_SATELLITE_STORE: &str = "TS";

/// The four location types.
///
/// Variant order is the map z-order: distribution centers are drawn first so
/// the denser store categories never hide them. `Ord` follows that order, so
/// any `BTreeMap<Category, _>` iterates in z-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "distribution_centers")]
    DistributionCenter,
    #[serde(rename = "distributors")]
    Distributor,
    #[serde(rename = "gold_stores")]
    GoldStore,
    #[serde(rename = "satellite_stores")]
    SatelliteStore,
}

impl Category {
    /// All categories in z-order.
    pub const ALL: [Category; 4] = [
        Category::DistributionCenter,
        Category::Distributor,
        Category::GoldStore,
        Category::SatelliteStore,
    ];

    /// Id prefix, e.g. `"TO"` for gold stores.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::DistributionCenter => PREFIX_DISTRIBUTION_CENTER,
            Self::Distributor => PREFIX_DISTRIBUTOR,
            Self::GoldStore => PREFIX_GOLD_STORE,
            Self::SatelliteStore => PREFIX_SATELLITE_STORE,
        }
    }

    /// URL and file-name slug.
    pub fn slug(self) -> &'static str {
        match self {
            Self::DistributionCenter => "distribution-centers",
            Self::Distributor => "distributors",
            Self::GoldStore => "gold-stores",
            Self::SatelliteStore => "satellite-stores",
        }
    }

    /// Key used in bulk export/import payloads and statistics maps.
    pub fn key(self) -> &'static str {
        match self {
            Self::DistributionCenter => "distribution_centers",
            Self::Distributor => "distributors",
            Self::GoldStore => "gold_stores",
            Self::SatelliteStore => "satellite_stores",
        }
    }

    /// Human-readable plural label used in layer names.
    pub fn label(self) -> &'static str {
        match self {
            Self::DistributionCenter => "Distribution Centers",
            Self::Distributor => "Authorized Distributors",
            Self::GoldStore => "Gold Stores",
            Self::SatelliteStore => "Satellite Stores",
        }
    }

    /// Singular entity name used in error messages.
    pub fn entity_name(self) -> &'static str {
        match self {
            Self::DistributionCenter => "Distribution center",
            Self::Distributor => "Distributor",
            Self::GoldStore => "Gold store",
            Self::SatelliteStore => "Satellite store",
        }
    }

    /// Parse a URL slug (`"gold-stores"`).
    pub fn from_slug(slug: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == slug)
            .ok_or_else(|| {
                CoreError::validation(
                    "category",
                    format!(
                        "Unknown category '{slug}'. Must be one of: {}",
                        Self::ALL.map(Category::slug).join(", ")
                    ),
                )
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
