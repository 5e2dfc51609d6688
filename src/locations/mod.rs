// Editing of stored location strings (the per-user "Geoinformation" value)


use crate::encoding::build_encoding;
use crate::error::GeoError;
use crate::parser::{is_valid_coordinate, locate_fragments, parse};
use tracing::debug;

/// Append an encoded location to a stored string
pub fn append_location(current: &str, encoding: &str) -> String {
    let current = current.trim_end();
    if current.trim_start().is_empty() {
        return encoding.to_string();
    }

    format!("{} {}", current, encoding)
}

/// Validate, encode and append a freshly submitted location
///
/// # Arguments
/// * `current` - Stored location string, possibly empty
/// * `name` - Place name from reverse geocoding, if any
pub fn add_location(
    current: &str,
    lat: f64,
    lng: f64,
    zoom: Option<u32>,
    name: Option<&str>,
) -> Result<String, GeoError> {
    if !is_valid_coordinate(lat, lng) {
        return Err(GeoError::InvalidCoordinate { lat, lng });
    }

    let encoding = build_encoding(lat, lng, zoom, name);
    debug!(%encoding, "adding location");

    Ok(append_location(current, &encoding))
}

/// Remove the location at `index` (0-based among parsed locations)
///
/// Fragments that do not parse are dropped from the rewritten string as well.
pub fn remove_location(current: &str, index: usize) -> Result<String, GeoError> {
    let valid: Vec<&str> = locate_fragments(current)
        .into_iter()
        .filter(|fragment| !parse(fragment).is_empty())
        .collect();

    if index >= valid.len() {
        return Err(GeoError::IndexOutOfRange {
            index,
            len: valid.len(),
        });
    }

    let kept: Vec<&str> = valid
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, fragment)| *fragment)
        .collect();

    debug!(index, removed = valid[index], "removing location");
    Ok(kept.join(" "))
}
