use crate::iso::classifier::{self, normalize};
use crate::iso::dimensions;
use crate::models::{ContainerDimension, IsoCode, ParsedSerial};
use crate::serial::parser::parse_container_number;

/// Size prefix used when the caller has none.
pub const DEFAULT_SIZE: &str = "20";

/// One classification request: a free-text type and an optional serial.
///
/// ```
/// use container_iso::ContainerTypeHelper;
///
/// let helper = ContainerTypeHelper::new("Reefer").with_serial("TCLU7024574");
/// assert_eq!(helper.full_iso("45"), "45RC");
/// assert!(helper.parsed_serial().unwrap().is_valid);
/// ```
#[derive(Debug, Clone)]
pub struct ContainerTypeHelper {
    raw: String,
    normalized: String,
    serial: Option<String>,
}

impl ContainerTypeHelper {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self {
            raw,
            normalized,
            serial: None,
        }
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        let serial = serial.into();
        self.serial = (!serial.is_empty()).then_some(serial);
        self
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn convert_iso(&self) -> Option<IsoCode> {
        classifier::convert_iso(&self.normalized)
    }

    pub fn convert_tos(&self) -> String {
        self.convert_iso()
            .map(|c| c.to_string())
            .unwrap_or_else(|| self.raw.to_uppercase())
    }

    pub fn full_iso(&self, size: &str) -> String {
        classifier::full_iso(&self.normalized, size)
    }

    pub fn is_high_cube(&self) -> bool {
        classifier::is_high_cube(&self.normalized)
    }

    pub fn dimensions(&self, size: &str) -> Option<ContainerDimension> {
        dimensions::get_dimensions(&self.normalized, size)
    }

    pub fn cbm(&self, size: &str) -> Option<u32> {
        dimensions::get_cbm(&self.normalized, size)
    }

    /// Parsed serial, if one was given and it has the serial's shape.
    pub fn parsed_serial(&self) -> Option<ParsedSerial> {
        self.serial.as_deref().and_then(parse_container_number)
    }
}
