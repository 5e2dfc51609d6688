mod geo_uri;
mod osm;
mod raw;
mod registry;
mod result;
mod scan;


pub use geo_uri::GeoUriParser;
pub use osm::OsmUrlParser;
pub use raw::RawPairParser;
pub use registry::ParserRegistry;
pub use result::{Coordinate, ParseReport, RejectedFragment, Rejection};

use crate::error::GeoError;
use std::ops::Range;
use std::sync::OnceLock;
use tracing::debug;

/// Core trait that every fragment format implements
pub trait FragmentParser: Send + Sync {
    /// Short identifier used in logs and diagnostics (e.g. "geo_uri")
    fn name(&self) -> &'static str;

    /// Parse a single whitespace-free fragment
    ///
    /// # Returns
    /// A bounds-checked coordinate, or the reason the fragment was not usable.
    /// `Rejection::Unrecognized` means "not my format" and lets the registry
    /// try the next one.
    fn parse(&self, fragment: &str) -> Result<Coordinate, Rejection>;
}

fn default_registry() -> &'static ParserRegistry {
    static REGISTRY: OnceLock<ParserRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ParserRegistry::new)
}

/// Check that latitude is within [-90, 90] and longitude within [-180, 180]
///
/// NaN is never valid.
pub fn is_valid_coordinate(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

/// Byte ranges of the whitespace-separated tokens in `text`
fn token_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (false, None) => start = Some(i),
            (true, Some(s)) => {
                spans.push(s..i);
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        spans.push(s..text.len());
    }

    spans
}

/// Split a location string on runs of whitespace
pub fn split_fragments(text: &str) -> Vec<&str> {
    token_spans(text)
        .into_iter()
        .map(|span| &text[span])
        .collect()
}

/// Split a location string into the fragments that are parsed one by one
///
/// Tokens are whitespace-separated. A token ending in `:` or `,` that does
/// not parse on its own is joined with the next token when the joined text
/// parses, so `geo: 49.53,8.35` and `geo:52.53, 13.39` are one location each.
/// Otherwise both tokens stay separate fragments.
pub fn locate_fragments(text: &str) -> Vec<&str> {
    locate_fragments_with_registry(default_registry(), text)
}

/// Fragment grouping with a caller-supplied set of formats
pub fn locate_fragments_with_registry<'a>(
    registry: &ParserRegistry,
    text: &'a str,
) -> Vec<&'a str> {
    let spans = token_spans(text);
    let mut fragments = Vec::with_capacity(spans.len());
    let mut i = 0;

    while i < spans.len() {
        let token = &text[spans[i].clone()];

        if let Some(next) = spans.get(i + 1) {
            let joined = &text[spans[i].start..next.end];
            if token.ends_with([':', ','])
                && registry.parse_fragment(token).is_err()
                && registry.parse_fragment(joined).is_ok()
            {
                fragments.push(joined);
                i += 2;
                continue;
            }
        }

        fragments.push(token);
        i += 1;
    }

    fragments
}

/// Parse a location string into coordinates
///
/// Unparseable or out-of-range fragments are skipped; the order of the
/// remaining ones is preserved. Never fails.
///
/// # Example
/// ```
/// let coords = geoinfo::parse("geo:52.52,13.40?z=15 invalid 50.11,8.68");
/// assert_eq!(coords.len(), 2);
/// assert_eq!(coords[0].zoom, Some(15));
/// ```
pub fn parse(text: &str) -> Vec<Coordinate> {
    parse_with_report(text).coordinates
}

/// Parse a possibly absent location string (an unset custom field)
pub fn parse_optional(text: Option<&str>) -> Vec<Coordinate> {
    text.map(parse).unwrap_or_default()
}

/// Parse untyped input, failing only when it is not text
pub fn parse_bytes(bytes: &[u8]) -> Result<Vec<Coordinate>, GeoError> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        GeoError::InvalidArgument(format!("location string is not valid UTF-8: {}", e))
    })?;

    Ok(parse(text))
}

/// Parse a location string and keep track of every dropped fragment
pub fn parse_with_report(text: &str) -> ParseReport {
    parse_with_registry(default_registry(), text)
}

/// Parse with a caller-supplied set of formats
pub fn parse_with_registry(registry: &ParserRegistry, text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (index, fragment) in locate_fragments_with_registry(registry, text)
        .into_iter()
        .enumerate()
    {
        match registry.parse_fragment(fragment) {
            Ok(coordinate) => report.coordinates.push(coordinate),
            Err(reason) => {
                debug!(index, fragment, %reason, "dropping location fragment");
                report.rejected.push(RejectedFragment {
                    index,
                    fragment: fragment.to_string(),
                    reason,
                });
            }
        }
    }

    report
}
