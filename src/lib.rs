//! `container_iso` — normalize container type aliases to ISO 6346 codes and
//! validate ISO 6346 container serials.
//!
//! ```
//! use container_iso::{classify_type, full_iso_code, validate_serial, IsoCode};
//!
//! assert_eq!(classify_type("flt"), Some(IsoCode::FlatRack));
//! assert_eq!(full_iso_code("flt", "40"), "40FR");
//! assert!(validate_serial("TCLU7024574"));
//! ```
//!
//! Everything here is a pure function over compiled-in tables.

pub mod error;
pub mod helper;
pub mod iso;
pub mod models;
pub mod serial;

pub use error::ContainerError;
pub use helper::{ContainerTypeHelper, DEFAULT_SIZE};
pub use iso::classifier::UNKNOWN_TYPE_CODE;
pub use iso::dimensions::{cbm_for, dimensions_for};
pub use models::{CategoryIdentifier, ContainerDimension, IsoCode, ParsedSerial};
pub use serial::check_digit::calculate_check_digit;

/// Classify free text into an ISO type group; `None` when no alias matches.
pub fn classify_type(raw: &str) -> Option<IsoCode> {
    iso::classifier::convert_iso(raw)
}

/// `{size}{code}`, or `{size}XX` when the type is unresolved.
pub fn full_iso_code(raw: &str, size: &str) -> String {
    iso::classifier::full_iso(raw, size)
}

/// Loose High Cube heuristic, see [`iso::classifier::is_high_cube`].
pub fn is_high_cube(raw: &str) -> bool {
    iso::classifier::is_high_cube(raw)
}

/// Exact category-name lookup (`"flat rack"` → FR).
pub fn name_to_code(name: &str) -> Option<IsoCode> {
    iso::classifier::iso_code_for_name(name)
}

/// First category name for a two-letter code (`"RC"` → `"reefer"`).
pub fn code_to_name(code: &str) -> Option<&'static str> {
    iso::classifier::iso_code_name(code)
}

/// Parse a container serial; `None` when it is not shaped like one.
pub fn parse_serial(code: &str) -> Option<ParsedSerial> {
    serial::parser::parse_container_number(code)
}

/// `true` only when the serial parses and its check digit matches.
pub fn validate_serial(code: &str) -> bool {
    serial::parser::validate_container_number(code)
}
