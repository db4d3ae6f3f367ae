//! Marker style tokens and icon asset resolution.
//!
//! A (category, bucket) pair selects a style token; the token names an image
//! asset. When the asset is missing the marker degrades to a generic pin
//! instead of failing the whole map.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::category::Category;
use crate::classify::StateBucket;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Rendered size of custom marker icons, in pixels.
pub const ICON_SIZE: (u32, u32) = (60, 60);

/// Anchor point of custom marker icons (icon center).
pub const ICON_ANCHOR: (u32, u32) = (30, 30);

/// Colour of the generic fallback marker.
pub const GENERIC_MARKER_COLOR: &str = "red";

/// Glyph of the generic fallback marker.
pub const GENERIC_MARKER_GLYPH: &str = "info-sign";

/// Categories with a dedicated style. Anything not listed uses the
/// distributor style.
const STYLE_TABLE: &[(Category, StyleToken)] = &[
    (Category::Distributor, StyleToken::Red),
    (Category::GoldStore, StyleToken::Gold),
    (Category::SatelliteStore, StyleToken::Blue),
];

/// Style used for categories missing from [`STYLE_TABLE`].
const FALLBACK_STYLE_CATEGORY: Category = Category::Distributor;

// ---------------------------------------------------------------------------
// Style selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleToken {
    Red,
    Gold,
    Blue,
}

impl StyleToken {
    /// Colour word used in asset file names.
    fn asset_stem(self) -> &'static str {
        match self {
            Self::Red => "rojo",
            Self::Gold => "dorado",
            Self::Blue => "azul",
        }
    }
}

/// Style token for a category, falling back to the distributor style.
pub fn style_for(category: Category) -> StyleToken {
    lookup(category)
        .or_else(|| lookup(FALLBACK_STYLE_CATEGORY))
        .unwrap_or(StyleToken::Red)
}

fn lookup(category: Category) -> Option<StyleToken> {
    STYLE_TABLE
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, token)| *token)
}

/// Which icon a marker should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconSelector {
    pub style: StyleToken,
    pub bucket: StateBucket,
}

impl IconSelector {
    pub fn new(category: Category, bucket: StateBucket) -> Self {
        Self {
            style: style_for(category),
            bucket,
        }
    }

    /// Image file name, e.g. `logo-dorado-activo-next.png` for a planned gold
    /// store.
    pub fn asset_name(&self) -> String {
        let suffix = match self.bucket {
            StateBucket::Active => "",
            StateBucket::Planned => "-next",
        };
        format!("logo-{}-activo{suffix}.png", self.style.asset_stem())
    }
}

// ---------------------------------------------------------------------------
// Asset resolution
// ---------------------------------------------------------------------------

/// Something that can tell whether an icon asset exists.
pub trait AssetCatalog {
    fn contains(&self, asset: &str) -> bool;
}

/// Icon assets stored as files in a directory.
#[derive(Debug, Clone)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetCatalog for AssetDir {
    fn contains(&self, asset: &str) -> bool {
        self.root.join(asset).is_file()
    }
}

/// Marker icon handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerIcon {
    Custom {
        asset: String,
        size: (u32, u32),
        anchor: (u32, u32),
    },
    Generic {
        color: &'static str,
        glyph: &'static str,
    },
}

impl MarkerIcon {
    pub fn generic() -> Self {
        Self::Generic {
            color: GENERIC_MARKER_COLOR,
            glyph: GENERIC_MARKER_GLYPH,
        }
    }
}

/// Resolve a selector against the available assets. Never fails.
pub fn resolve_icon(selector: IconSelector, catalog: &dyn AssetCatalog) -> MarkerIcon {
    let asset = selector.asset_name();
    if catalog.contains(&asset) {
        MarkerIcon::Custom {
            asset,
            size: ICON_SIZE,
            anchor: ICON_ANCHOR,
        }
    } else {
        MarkerIcon::generic()
    }
}

/// Presence of one icon asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconCheck {
    pub asset: String,
    pub exists: bool,
}

/// Every asset the style table can select, with its presence in `catalog`.
pub fn verify_icons(catalog: &dyn AssetCatalog) -> Vec<IconCheck> {
    STYLE_TABLE
        .iter()
        .flat_map(|(_, style)| {
            [StateBucket::Active, StateBucket::Planned].map(|bucket| IconSelector {
                style: *style,
                bucket,
            })
        })
        .map(|selector| {
            let asset = selector.asset_name();
            IconCheck {
                exists: catalog.contains(&asset),
                asset,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct FixedCatalog(HashSet<&'static str>);

    impl AssetCatalog for FixedCatalog {
        fn contains(&self, asset: &str) -> bool {
            self.0.contains(asset)
        }
    }

    #[test]
    fn distribution_centers_use_distributor_style() {
        assert_eq!(style_for(Category::DistributionCenter), StyleToken::Red);
        assert_eq!(
            IconSelector::new(Category::DistributionCenter, StateBucket::Active).asset_name(),
            "logo-rojo-activo.png"
        );
    }

    #[test]
    fn planned_uses_next_asset() {
        assert_eq!(
            IconSelector::new(Category::GoldStore, StateBucket::Planned).asset_name(),
            "logo-dorado-activo-next.png"
        );
        assert_eq!(
            IconSelector::new(Category::SatelliteStore, StateBucket::Planned).asset_name(),
            "logo-azul-activo-next.png"
        );
    }

    #[test]
    fn present_asset_resolves_to_custom_icon() {
        let catalog = FixedCatalog(HashSet::from(["logo-azul-activo.png"]));
        let icon = resolve_icon(
            IconSelector::new(Category::SatelliteStore, StateBucket::Active),
            &catalog,
        );
        assert_eq!(
            icon,
            MarkerIcon::Custom {
                asset: "logo-azul-activo.png".into(),
                size: ICON_SIZE,
                anchor: ICON_ANCHOR,
            }
        );
    }

    #[test]
    fn missing_asset_falls_back_to_generic_marker() {
        let catalog = FixedCatalog(HashSet::new());
        let icon = resolve_icon(
            IconSelector::new(Category::GoldStore, StateBucket::Active),
            &catalog,
        );
        assert_eq!(icon, MarkerIcon::generic());
    }

    #[test]
    fn asset_dir_checks_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("logo-rojo-activo.png"), b"png").unwrap();
        let catalog = AssetDir::new(dir.path());

        assert!(catalog.contains("logo-rojo-activo.png"));
        assert!(!catalog.contains("logo-rojo-activo-next.png"));
    }

    #[test]
    fn verify_lists_six_assets() {
        let catalog = FixedCatalog(HashSet::from(["logo-dorado-activo.png"]));
        let checks = verify_icons(&catalog);

        assert_eq!(checks.len(), 6);
        let present: Vec<_> = checks.iter().filter(|c| c.exists).collect();
        assert_eq!(present.len(), 1);
        assert_eq!(present[0].asset, "logo-dorado-activo.png");
    }
}
