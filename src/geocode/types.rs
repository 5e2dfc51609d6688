use serde::{Deserialize, Serialize};

/// Reply of a Nominatim `/reverse?format=json&addressdetails=1` request
///
/// Only the fields used for naming a location are modeled; everything else
/// in the reply is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

/// City and postcode extracted from a reverse-geocoding reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub city: Option<String>,
    pub postcode: Option<String>,
}
