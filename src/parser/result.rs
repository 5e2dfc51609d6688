use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A validated location parsed from one fragment
///
/// Only produced after bounds validation, so `lat` is within [-90, 90] and
/// `lng` within [-180, 180].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
    /// Map zoom level, when the source carried one
    pub zoom: Option<u32>,
    /// Human-readable label (e.g. "10178 Berlin"), decoded
    pub name: Option<String>,
}

impl Coordinate {
    /// Validate a lat/lng pair and wrap it without zoom or name
    pub fn new(lat: f64, lng: f64) -> Result<Self, Rejection> {
        if !super::is_valid_coordinate(lat, lng) {
            return Err(Rejection::OutOfBounds { lat, lng });
        }

        Ok(Self {
            lat,
            lng,
            zoom: None,
            name: None,
        })
    }

    pub fn with_zoom(mut self, zoom: Option<u32>) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }
}

/// Why a fragment contributed nothing to the parse result
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    #[error("no known location format")]
    Unrecognized,

    #[error("coordinates out of range: lat {lat}, lng {lng}")]
    OutOfBounds { lat: f64, lng: f64 },
}

/// A fragment that was dropped during parsing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedFragment {
    /// Position in the fragment sequence (0-based, counting all fragments)
    pub index: usize,
    /// The fragment text as it appeared in the input
    pub fragment: String,
    #[serde(flatten)]
    pub reason: Rejection,
}

/// Parse result with diagnostics for dropped fragments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseReport {
    /// Parsed coordinates in input order
    pub coordinates: Vec<Coordinate>,
    /// Fragments that produced nothing, in input order
    pub rejected: Vec<RejectedFragment>,
}

impl ParseReport {
    /// Total number of fragments seen
    pub fn fragment_count(&self) -> usize {
        self.coordinates.len() + self.rejected.len()
    }

    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
