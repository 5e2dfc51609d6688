// Reverse-geocoding helpers: request URL, reply model, place naming.
// The HTTP call itself belongs to the caller.

mod types;


pub use types::{Address, Place, ReverseGeocodeResponse};

use crate::error::GeoError;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

pub const USER_AGENT: &str = concat!("geoinfo/", env!("CARGO_PKG_VERSION"));

/// Languages requested for place names, most preferred first
pub const ACCEPT_LANGUAGE: &str = "de,en";

/// Build the reverse-geocoding request URL for a coordinate
pub fn reverse_geocode_url(base: &str, lat: f64, lng: f64) -> String {
    format!(
        "{}?lat={}&lon={}&format=json&addressdetails=1",
        base.trim_end_matches('?'),
        lat,
        lng
    )
}

/// Format a place name as "<postcode> <city>", or whichever part is present
pub fn format_location_name(city: Option<&str>, postcode: Option<&str>) -> Option<String> {
    let city = city.map(str::trim).filter(|c| !c.is_empty());
    let postcode = postcode.map(str::trim).filter(|p| !p.is_empty());

    match (city, postcode) {
        (Some(city), Some(postcode)) => Some(format!("{} {}", postcode, city)),
        (Some(city), None) => Some(city.to_string()),
        (None, Some(postcode)) => Some(postcode.to_string()),
        (None, None) => None,
    }
}

impl Place {
    /// Pick city and postcode out of a reply
    ///
    /// The city is the first of `city`, `town`, `village`, `municipality`
    /// that is present. Returns `None` when neither part is available.
    pub fn from_response(response: &ReverseGeocodeResponse) -> Option<Self> {
        let address = response.address.as_ref()?;

        let city = [
            &address.city,
            &address.town,
            &address.village,
            &address.municipality,
        ]
        .into_iter()
        .find_map(|field| field.clone());
        let postcode = address.postcode.clone();

        if city.is_none() && postcode.is_none() {
            return None;
        }

        Some(Self { city, postcode })
    }

    /// Parse a raw JSON reply
    pub fn from_json(json: &str) -> Result<Option<Self>, GeoError> {
        let response: ReverseGeocodeResponse = serde_json::from_str(json)?;
        Ok(Self::from_response(&response))
    }

    /// Label to store with a location (e.g. "10178 Berlin")
    pub fn display_name(&self) -> Option<String> {
        format_location_name(self.city.as_deref(), self.postcode.as_deref())
    }
}
