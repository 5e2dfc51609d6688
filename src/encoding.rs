//! Canonical `geo:` encoding used for stored location strings

use std::borrow::Cow;

/// Scheme written by the builder
pub const SCHEME: &str = "geo";

/// Build the canonical encoding `geo:lat,lng[?z=zoom&name=Name]`
///
/// Bounds are not checked here; validate with
/// [`is_valid_coordinate`](crate::is_valid_coordinate) first. A blank name is
/// left out.
///
/// # Example
/// ```
/// let uri = geoinfo::build_encoding(52.53515, 13.394236, Some(19), Some("10178 Berlin"));
/// assert_eq!(uri, "geo:52.53515,13.394236?z=19&name=10178%20Berlin");
/// ```
pub fn build_encoding(lat: f64, lng: f64, zoom: Option<u32>, name: Option<&str>) -> String {
    let mut uri = format!("{}:{},{}", SCHEME, format_degrees(lat), format_degrees(lng));

    let mut params = Vec::new();
    if let Some(zoom) = zoom {
        params.push(format!("z={}", zoom));
    }
    if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
        params.push(format!("name={}", encode_component(name)));
    }

    if !params.is_empty() {
        uri.push('?');
        uri.push_str(&params.join("&"));
    }

    uri
}

/// Shortest round-trip decimal, always with a fractional part ("52.0")
fn format_degrees(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Percent-encode a parameter value
///
/// Only ASCII alphanumerics and `-_.~` pass through, so the result never
/// contains whitespace or query delimiters.
pub fn encode_component(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Decode a parameter value: `+` is a space, `%XX` is a byte
///
/// Malformed `%` sequences are kept as they are and invalid UTF-8 is replaced,
/// so this never fails.
pub fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
