//! Record builders shared by unit tests.

use serde_json::Map;

use crate::location::{Location, LocationState};

pub fn location(id: &str, state: LocationState, opening_date: Option<&str>) -> Location {
    Location {
        id: id.to_string(),
        name: format!("Site {id}"),
        city: "San José".to_string(),
        address: "Avenida Central".to_string(),
        latitude: 9.93,
        longitude: -84.08,
        state,
        opening_date: opening_date.map(str::to_string),
        attributes: Map::new(),
    }
}
