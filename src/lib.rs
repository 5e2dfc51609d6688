// Public API exports
pub mod encoding;
pub mod error;
pub mod geocode;
pub mod locations;
pub mod parser;

// Re-export main types for convenience
pub use error::GeoError;

pub use parser::{
    Coordinate, FragmentParser, GeoUriParser, OsmUrlParser, ParseReport, ParserRegistry,
    RawPairParser, RejectedFragment, Rejection, is_valid_coordinate, locate_fragments,
    locate_fragments_with_registry, parse, parse_bytes, parse_optional, parse_with_registry,
    parse_with_report, split_fragments,
};

pub use encoding::{build_encoding, decode_component, encode_component};

pub use locations::{add_location, append_location, remove_location};

pub use geocode::{Place, ReverseGeocodeResponse, format_location_name, reverse_geocode_url};
