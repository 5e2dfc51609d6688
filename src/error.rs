use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid coordinates: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Location index {index} out of range ({len} locations)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Malformed geocoding response: {0}")]
    Json(#[from] serde_json::Error),
}
