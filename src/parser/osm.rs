use super::scan::{scan_decimal, scan_unsigned};
use super::{Coordinate, FragmentParser, Rejection};

/// Host that marks a fragment as a map-viewer permalink
const OSM_HOST: &str = "openstreetmap.org";

/// OpenStreetMap permalinks: `https://www.openstreetmap.org/#map=19/52.129158/11.604304`
pub struct OsmUrlParser;

impl FragmentParser for OsmUrlParser {
    fn name(&self) -> &'static str {
        "osm_url"
    }

    fn parse(&self, fragment: &str) -> Result<Coordinate, Rejection> {
        if !fragment.to_ascii_lowercase().contains(OSM_HOST) {
            return Err(Rejection::Unrecognized);
        }

        let (zoom, lat, lng) = Self::map_params(fragment).ok_or(Rejection::Unrecognized)?;

        Ok(Coordinate::new(lat, lng)?.with_zoom(Some(zoom)))
    }
}

impl OsmUrlParser {
    /// Find the first `map=zoom/lat/lng` parameter introduced by `#`, `?` or `&`
    ///
    /// Anything after the longitude (further parameters, layers) is ignored.
    fn map_params(url: &str) -> Option<(u32, f64, f64)> {
        url.match_indices("map=")
            .filter(|&(i, _)| i > 0 && matches!(url.as_bytes()[i - 1], b'#' | b'?' | b'&'))
            .find_map(|(i, marker)| Self::triple(&url[i + marker.len()..]))
    }

    fn triple(params: &str) -> Option<(u32, f64, f64)> {
        let (zoom, rest) = scan_unsigned(params)?;
        let (lat, rest) = scan_decimal(rest.strip_prefix('/')?)?;
        let (lng, _) = scan_decimal(rest.strip_prefix('/')?)?;

        Some((zoom, lat, lng))
    }
}
