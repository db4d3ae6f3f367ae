//! In-memory create, update, and delete over one category's records.
//!
//! The store loads a collection, applies one of these functions, and writes
//! the whole collection back. Each function validates before touching the
//! collection, so an error leaves `records` unchanged.

use chrono::NaiveDate;

use crate::allocator::allocate_id;
use crate::category::Category;
use crate::error::CoreError;
use crate::location::{Location, LocationInput, LocationState};

pub const FIELD_NAME: &str = "nombre";
pub const FIELD_CITY: &str = "ciudad";
pub const FIELD_ADDRESS: &str = "direccion";
pub const FIELD_LATITUDE: &str = "lat";
pub const FIELD_LONGITUDE: &str = "lon";
pub const FIELD_STATE: &str = "estado";

/// Create a record from `input`, assign it the next free id, and append it.
///
/// `name`, `city`, `address`, `latitude`, and `longitude` are required.
/// State defaults to active and the opening date to `today`.
pub fn apply_create(
    category: Category,
    records: &mut Vec<Location>,
    input: LocationInput,
    today: NaiveDate,
) -> Result<Location, CoreError> {
    let attributes = input.pass_through_attributes();

    let name = require_text(input.name, FIELD_NAME)?;
    let city = require_text(input.city, FIELD_CITY)?;
    let address = require_text(input.address, FIELD_ADDRESS)?;
    let latitude = require_coordinate(input.latitude, FIELD_LATITUDE)?;
    let longitude = require_coordinate(input.longitude, FIELD_LONGITUDE)?;
    let state = parse_state(input.state.as_deref())?.unwrap_or_default();
    let opening_date = non_empty(input.opening_date)
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

    let id = allocate_id(category, records)?;

    let location = Location {
        id,
        name,
        city,
        address,
        latitude,
        longitude,
        state,
        opening_date: Some(opening_date),
        attributes,
    };
    records.push(location.clone());
    Ok(location)
}

/// Merge the provided fields of `input` onto the record with `id`.
///
/// The record keeps its id whatever the input says. An empty opening date
/// clears it.
pub fn apply_update(
    category: Category,
    records: &mut [Location],
    id: &str,
    input: LocationInput,
) -> Result<Location, CoreError> {
    let index = position(category, records, id)?;
    let mut updated = records[index].clone();
    let extra = input.pass_through_attributes();

    if let Some(name) = input.name {
        updated.name = require_text(Some(name), FIELD_NAME)?;
    }
    if let Some(city) = input.city {
        updated.city = require_text(Some(city), FIELD_CITY)?;
    }
    if let Some(address) = input.address {
        updated.address = require_text(Some(address), FIELD_ADDRESS)?;
    }
    if let Some(latitude) = input.latitude {
        updated.latitude = require_coordinate(Some(latitude), FIELD_LATITUDE)?;
    }
    if let Some(longitude) = input.longitude {
        updated.longitude = require_coordinate(Some(longitude), FIELD_LONGITUDE)?;
    }
    if let Some(state) = parse_state(input.state.as_deref())? {
        updated.state = state;
    }
    if let Some(opening_date) = input.opening_date {
        updated.opening_date = non_empty(Some(opening_date));
    }
    updated.attributes.extend(extra);

    records[index] = updated.clone();
    Ok(updated)
}

/// Remove the record with `id`, returning it.
pub fn apply_delete(
    category: Category,
    records: &mut Vec<Location>,
    id: &str,
) -> Result<Location, CoreError> {
    let index = position(category, records, id)?;
    Ok(records.remove(index))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn position(category: Category, records: &[Location], id: &str) -> Result<usize, CoreError> {
    records
        .iter()
        .position(|r| r.id == id)
        .ok_or_else(|| CoreError::NotFound {
            entity: category.entity_name(),
            id: id.to_string(),
        })
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String, CoreError> {
    non_empty(value).ok_or_else(|| CoreError::validation(field, "must not be empty"))
}

fn require_coordinate(value: Option<f64>, field: &'static str) -> Result<f64, CoreError> {
    match value {
        Some(v) if v.is_finite() => Ok(v),
        Some(_) => Err(CoreError::validation(field, "must be a finite number")),
        None => Err(CoreError::validation(field, "is required")),
    }
}

/// Parse an optional state; an empty string counts as not provided.
fn parse_state(value: Option<&str>) -> Result<Option<LocationState>, CoreError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => LocationState::from_str_value(s).map(Some),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
