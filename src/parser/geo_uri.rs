use super::scan::{parse_pair, scan_unsigned};
use super::{Coordinate, FragmentParser, Rejection};
use crate::encoding::decode_component;

/// Scheme words accepted before the colon, compared ASCII case-insensitively.
/// "eo" is a frequent typo in stored data.
const SCHEMES: [&str; 2] = ["geo", "eo"];

/// Tagged encoding: `geo:lat,lng[?z=zoom&name=Name]`
pub struct GeoUriParser;

impl FragmentParser for GeoUriParser {
    fn name(&self) -> &'static str {
        "geo_uri"
    }

    fn parse(&self, fragment: &str) -> Result<Coordinate, Rejection> {
        let body = Self::strip_scheme(fragment).ok_or(Rejection::Unrecognized)?;

        let (coords, query) = match body.split_once('?') {
            Some((coords, query)) => (coords, Some(query)),
            None => (body, None),
        };

        let (lat, lng) = parse_pair(coords).ok_or(Rejection::Unrecognized)?;
        let coordinate = Coordinate::new(lat, lng)?;

        let Some(query) = query else {
            return Ok(coordinate);
        };

        Ok(coordinate
            .with_zoom(Self::zoom_param(query))
            .with_name(Self::name_param(query)))
    }
}

impl GeoUriParser {
    /// Remove `geo:` (or a typo variant) and any whitespace after the colon
    fn strip_scheme(fragment: &str) -> Option<&str> {
        let (scheme, rest) = fragment.split_once(':')?;

        SCHEMES
            .iter()
            .any(|s| scheme.eq_ignore_ascii_case(s))
            .then(|| rest.trim_start())
    }

    fn params(query: &str) -> impl Iterator<Item = (&str, &str)> {
        query.split('&').filter_map(|pair| pair.split_once('='))
    }

    /// First `z` parameter that starts with digits
    fn zoom_param(query: &str) -> Option<u32> {
        Self::params(query)
            .filter(|&(key, _)| key == "z")
            .find_map(|(_, value)| scan_unsigned(value).map(|(zoom, _)| zoom))
    }

    /// First non-empty `name` parameter, percent-decoded
    fn name_param(query: &str) -> Option<String> {
        Self::params(query)
            .find(|&(key, value)| key == "name" && !value.is_empty())
            .map(|(_, value)| decode_component(value))
    }
}
