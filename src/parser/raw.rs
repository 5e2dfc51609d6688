use super::scan::parse_pair;
use super::{Coordinate, FragmentParser, Rejection};

/// Bare `lat,lng` without prefix or parameters
pub struct RawPairParser;

impl FragmentParser for RawPairParser {
    fn name(&self) -> &'static str {
        "raw_pair"
    }

    fn parse(&self, fragment: &str) -> Result<Coordinate, Rejection> {
        let (lat, lng) = parse_pair(fragment).ok_or(Rejection::Unrecognized)?;
        Coordinate::new(lat, lng)
    }
}
