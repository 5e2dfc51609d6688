use super::{Coordinate, FragmentParser, GeoUriParser, OsmUrlParser, RawPairParser, Rejection};
use tracing::trace;

/// Ordered dispatch table of fragment formats
///
/// Formats are tried in registration order; the first one that yields a
/// coordinate wins.
pub struct ParserRegistry {
    parsers: Vec<Box<dyn FragmentParser>>,
}

impl ParserRegistry {
    /// Create a registry with the built-in formats in priority order:
    /// OpenStreetMap URL, `geo:` URI, raw pair
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(OsmUrlParser);
        registry.register(GeoUriParser);
        registry.register(RawPairParser);
        registry
    }

    /// Create a registry that recognizes nothing
    pub fn empty() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Append a format after the ones already registered
    ///
    /// # Example
    /// ```ignore
    /// registry.register(GoogleMapsUrlParser);
    /// ```
    pub fn register(&mut self, parser: impl FragmentParser + 'static) {
        self.parsers.push(Box::new(parser));
    }

    /// Parse one fragment with the first matching format
    ///
    /// An out-of-range rejection is reported in preference to
    /// `Unrecognized`, so callers learn that the format itself was fine.
    pub fn parse_fragment(&self, fragment: &str) -> Result<Coordinate, Rejection> {
        let mut rejection = Rejection::Unrecognized;

        for parser in &self.parsers {
            match parser.parse(fragment) {
                Ok(coordinate) => {
                    trace!(format = parser.name(), fragment, "fragment matched");
                    return Ok(coordinate);
                }
                Err(out_of_bounds @ Rejection::OutOfBounds { .. }) => rejection = out_of_bounds,
                Err(Rejection::Unrecognized) => {}
            }
        }

        Err(rejection)
    }

    /// Get the number of registered formats
    pub fn parser_count(&self) -> usize {
        self.parsers.len()
    }

    /// List registered format names in priority order
    pub fn registered_formats(&self) -> Vec<&'static str> {
        self.parsers.iter().map(|p| p.name()).collect()
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
