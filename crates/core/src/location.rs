//! Location records, lifecycle states, and write inputs.
//!
//! Records persist with the keys of the existing data files (`nombre`,
//! `ciudad`, `estado`, ...). Keys the engine does not interpret are kept in
//! [`Location::attributes`] and written back untouched.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::category::Category;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATE_ACTIVE: &str = "activo";
pub const STATE_PLANNED: &str = "planeado";
pub const STATE_UPCOMING_OPENING: &str = "proxima_apertura";
pub const STATE_UNDER_CONSTRUCTION: &str = "en_construccion";

/// All valid persisted state strings.
pub const VALID_STATES: &[&str] = &[
    STATE_ACTIVE,
    STATE_PLANNED,
    STATE_UPCOMING_OPENING,
    STATE_UNDER_CONSTRUCTION,
];

/// Pass-through attribute keys with a typed view in [`CategoryDetails`].
pub const ATTR_PHONE: &str = "telefono";
pub const ATTR_WAREHOUSE_CAPACITY: &str = "capacidad_almacen";
pub const ATTR_CENTER_TYPE: &str = "tipo_centro";
pub const ATTR_COVERAGE_ZONE: &str = "zona_cobertura";
pub const ATTR_RESPONSIBLE: &str = "responsable";
pub const ATTR_FREEZER_CAPACITY: &str = "capacidad_congelador";
pub const ATTR_SATELLITE_TYPE: &str = "tipo_satelite";

/// Key that must never reach the attribute bag; ids are allocator-owned.
const ATTR_ID: &str = "id";

// ---------------------------------------------------------------------------
// Lifecycle state
// ---------------------------------------------------------------------------

/// Lifecycle state of a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocationState {
    #[default]
    Active,
    Planned,
    UpcomingOpening,
    UnderConstruction,
    /// A stored value outside [`VALID_STATES`]. Treated as active and
    /// written back verbatim.
    Unrecognized(String),
}

impl LocationState {
    /// The four known states.
    pub const ALL: [LocationState; 4] = [
        LocationState::Active,
        LocationState::Planned,
        LocationState::UpcomingOpening,
        LocationState::UnderConstruction,
    ];

    /// Parse a persisted state string.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATE_ACTIVE => Ok(Self::Active),
            STATE_PLANNED => Ok(Self::Planned),
            STATE_UPCOMING_OPENING => Ok(Self::UpcomingOpening),
            STATE_UNDER_CONSTRUCTION => Ok(Self::UnderConstruction),
            _ => Err(CoreError::validation(
                "estado",
                format!(
                    "Invalid state '{s}'. Must be one of: {}",
                    VALID_STATES.join(", ")
                ),
            )),
        }
    }

    /// Persisted string value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => STATE_ACTIVE,
            Self::Planned => STATE_PLANNED,
            Self::UpcomingOpening => STATE_UPCOMING_OPENING,
            Self::UnderConstruction => STATE_UNDER_CONSTRUCTION,
            Self::Unrecognized(raw) => raw,
        }
    }

    /// The known state this value behaves as. Unrecognized values are active.
    pub fn effective(&self) -> LocationState {
        match self {
            Self::Unrecognized(_) => Self::Active,
            known => known.clone(),
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active | Self::Unrecognized(_) => "Active",
            Self::Planned => "Planned",
            Self::UpcomingOpening => "Upcoming Opening",
            Self::UnderConstruction => "Under Construction",
        }
    }
}

impl Serialize for LocationState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Stored data is read leniently: a missing or empty state is an active
/// location, and an unknown one is kept as [`LocationState::Unrecognized`].
/// Writes go through [`LocationState::from_str_value`].
impl<'de> Deserialize<'de> for LocationState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            None => Self::Active,
            Some(s) if s.trim().is_empty() => Self::Active,
            Some(s) => Self::from_str_value(&s).unwrap_or(Self::Unrecognized(s)),
        })
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A physical site. Belongs to exactly one [`Category`], implied by the
/// collection it is stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ciudad")]
    pub city: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "estado", default)]
    pub state: LocationState,
    /// `YYYY-MM-DD`, kept as text. Never parsed by the engine.
    #[serde(
        rename = "fecha_apertura",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_date: Option<String>,
    /// Category-specific and unknown keys, passed through verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Location {
    /// Typed view of the category-specific attributes.
    pub fn details(&self, category: Category) -> CategoryDetails {
        let attr = |key| attribute_text(&self.attributes, key);
        match category {
            Category::DistributionCenter => CategoryDetails::DistributionCenter {
                phone: attr(ATTR_PHONE),
                warehouse_capacity: attr(ATTR_WAREHOUSE_CAPACITY),
                center_type: attr(ATTR_CENTER_TYPE),
                coverage_zone: attr(ATTR_COVERAGE_ZONE),
                responsible: attr(ATTR_RESPONSIBLE),
            },
            Category::Distributor => CategoryDetails::Distributor {
                phone: attr(ATTR_PHONE),
            },
            Category::GoldStore => CategoryDetails::GoldStore {
                phone: attr(ATTR_PHONE),
                freezer_capacity: attr(ATTR_FREEZER_CAPACITY),
            },
            Category::SatelliteStore => CategoryDetails::SatelliteStore {
                phone: attr(ATTR_PHONE),
                satellite_type: attr(ATTR_SATELLITE_TYPE),
            },
        }
    }
}

/// Category-specific attributes the directory knows about.
///
/// Read-only view; the attribute bag on [`Location`] is what persists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum CategoryDetails {
    DistributionCenter {
        phone: Option<String>,
        warehouse_capacity: Option<String>,
        center_type: Option<String>,
        coverage_zone: Option<String>,
        responsible: Option<String>,
    },
    Distributor {
        phone: Option<String>,
    },
    GoldStore {
        phone: Option<String>,
        freezer_capacity: Option<String>,
    },
    SatelliteStore {
        phone: Option<String>,
        satellite_type: Option<String>,
    },
}

/// Render a pass-through value as text. Numbers are accepted because older
/// files store capacities as numbers.
fn attribute_text(attributes: &Map<String, Value>, key: &str) -> Option<String> {
    match attributes.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

// ---------------------------------------------------------------------------
// Write input
// ---------------------------------------------------------------------------

/// Full or partial record supplied by a caller on create or update.
///
/// Absent fields are `None`. An `id` key in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInput {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "lat", default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(rename = "lon", default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(
        rename = "fecha_apertura",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_date: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LocationInput {
    /// Attribute bag with allocator-owned keys removed.
    pub(crate) fn pass_through_attributes(&self) -> Map<String, Value> {
        let mut attributes = self.attributes.clone();
        attributes.remove(ATTR_ID);
        attributes
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stored_record() -> Value {
        json!({
            "id": "TO004",
            "nombre": "Tienda Oro Heredia",
            "ciudad": "Heredia",
            "direccion": "100m norte del parque",
            "lat": 9.998,
            "lon": -84.117,
            "estado": "proxima_apertura",
            "fecha_apertura": "2026-03-01",
            "capacidad_congelador": 1200,
            "telefono": "2260-0000",
            "nota_interna": "no tocar"
        })
    }

    #[test]
    fn deserializes_stored_keys() {
        let loc: Location = serde_json::from_value(stored_record()).unwrap();
        assert_eq!(loc.id, "TO004");
        assert_eq!(loc.city, "Heredia");
        assert_eq!(loc.state, LocationState::UpcomingOpening);
        assert_eq!(loc.opening_date.as_deref(), Some("2026-03-01"));
        assert_eq!(loc.attributes["nota_interna"], "no tocar");
    }

    #[test]
    fn unknown_keys_survive_serialization() {
        let raw = stored_record();
        let loc: Location = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&loc).unwrap(), raw);
    }

    #[test]
    fn missing_state_defaults_to_active() {
        let mut raw = stored_record();
        raw.as_object_mut().unwrap().remove("estado");
        let loc: Location = serde_json::from_value(raw).unwrap();
        assert_eq!(loc.state, LocationState::Active);
    }

    #[test]
    fn unrecognized_stored_state_behaves_as_active() {
        let mut raw = stored_record();
        raw["estado"] = json!("cerrado");
        let loc: Location = serde_json::from_value(raw).unwrap();
        assert_eq!(loc.state, LocationState::Unrecognized("cerrado".into()));
        assert_eq!(loc.state.effective(), LocationState::Active);
        assert_eq!(loc.state.label(), "Active");
    }

    #[test]
    fn unrecognized_stored_state_is_written_back_verbatim() {
        let mut raw = stored_record();
        raw["estado"] = json!("cerrado");
        let loc: Location = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&loc).unwrap(), raw);
    }

    #[test]
    fn empty_opening_date_is_no_date() {
        let mut raw = stored_record();
        raw["fecha_apertura"] = json!("");
        let loc: Location = serde_json::from_value(raw).unwrap();
        assert_eq!(loc.opening_date, None);
    }

    #[test]
    fn state_from_str_rejects_unknown() {
        let err = LocationState::from_str_value("closed").unwrap_err();
        assert!(matches!(err, CoreError::Validation { field: "estado", .. }));
    }

    #[test]
    fn gold_store_details() {
        let loc: Location = serde_json::from_value(stored_record()).unwrap();
        assert_eq!(
            loc.details(Category::GoldStore),
            CategoryDetails::GoldStore {
                phone: Some("2260-0000".into()),
                freezer_capacity: Some("1200".into()),
            }
        );
    }

    #[test]
    fn input_id_is_not_passed_through() {
        let input: LocationInput =
            serde_json::from_value(json!({"id": "D999", "telefono": "1"})).unwrap();
        let attrs = input.pass_through_attributes();
        assert!(!attrs.contains_key("id"));
        assert_eq!(attrs["telefono"], "1");
    }
}
