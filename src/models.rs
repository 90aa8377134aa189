use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContainerError;

/// ISO 6346 container type group.
///
/// Serialized as the two-letter code (`"GP"`, `"RC"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IsoCode {
    #[serde(rename = "GP")]
    GeneralPurpose,
    #[serde(rename = "HC")]
    HighCube,
    #[serde(rename = "RC")]
    Reefer,
    #[serde(rename = "FR")]
    FlatRack,
    #[serde(rename = "OT")]
    OpenTop,
    #[serde(rename = "TK")]
    Tank,
    #[serde(rename = "VT")]
    Ventilated,
    #[serde(rename = "PL")]
    Platform,
    #[serde(rename = "BU")]
    Bulk,
    #[serde(rename = "HH")]
    HalfHeight,
    #[serde(rename = "LN")]
    Liner,
    #[serde(rename = "PW")]
    PalletWide,
    #[serde(rename = "IN")]
    Insulated,
    #[serde(rename = "SD")]
    SideDoor,
    #[serde(rename = "CL")]
    Collapsible,
    #[serde(rename = "UC")]
    Uncontainerized,
}

impl IsoCode {
    /// Every code, in alias-rule priority order.
    pub const ALL: [IsoCode; 16] = [
        IsoCode::GeneralPurpose,
        IsoCode::HighCube,
        IsoCode::Reefer,
        IsoCode::FlatRack,
        IsoCode::OpenTop,
        IsoCode::Tank,
        IsoCode::Ventilated,
        IsoCode::Platform,
        IsoCode::Bulk,
        IsoCode::HalfHeight,
        IsoCode::Liner,
        IsoCode::PalletWide,
        IsoCode::Insulated,
        IsoCode::SideDoor,
        IsoCode::Collapsible,
        IsoCode::Uncontainerized,
    ];

    /// Two-letter code as used in full designators such as `40HC`.
    pub fn code(&self) -> &'static str {
        match self {
            IsoCode::GeneralPurpose => "GP",
            IsoCode::HighCube => "HC",
            IsoCode::Reefer => "RC",
            IsoCode::FlatRack => "FR",
            IsoCode::OpenTop => "OT",
            IsoCode::Tank => "TK",
            IsoCode::Ventilated => "VT",
            IsoCode::Platform => "PL",
            IsoCode::Bulk => "BU",
            IsoCode::HalfHeight => "HH",
            IsoCode::Liner => "LN",
            IsoCode::PalletWide => "PW",
            IsoCode::Insulated => "IN",
            IsoCode::SideDoor => "SD",
            IsoCode::Collapsible => "CL",
            IsoCode::Uncontainerized => "UC",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            IsoCode::GeneralPurpose => "General Purpose",
            IsoCode::HighCube => "High Cube",
            IsoCode::Reefer => "Reefer",
            IsoCode::FlatRack => "Flat Rack",
            IsoCode::OpenTop => "Open Top",
            IsoCode::Tank => "Tank",
            IsoCode::Ventilated => "Ventilated",
            IsoCode::Platform => "Platform",
            IsoCode::Bulk => "Bulk",
            IsoCode::HalfHeight => "Half Height",
            IsoCode::Liner => "Liner",
            IsoCode::PalletWide => "Pallet Wide",
            IsoCode::Insulated => "Insulated",
            IsoCode::SideDoor => "Side Door",
            IsoCode::Collapsible => "Collapsible",
            IsoCode::Uncontainerized => "Uncontainerized",
        }
    }
}

impl std::fmt::Display for IsoCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for IsoCode {
    type Err = ContainerError;

    /// Parse a two-letter code, case-insensitive and trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IsoCode::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ContainerError::UnknownIsoCode(wanted.to_string()))
    }
}

/// Category identifier: the fourth character of a container serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryIdentifier {
    /// `U` — freight container.
    #[serde(rename = "U")]
    FreightContainer,
    /// `J` — detachable freight container-related equipment.
    #[serde(rename = "J")]
    DetachableEquipment,
    /// `Z` — trailer or chassis.
    #[serde(rename = "Z")]
    Trailer,
}

impl CategoryIdentifier {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(CategoryIdentifier::FreightContainer),
            'J' => Some(CategoryIdentifier::DetachableEquipment),
            'Z' => Some(CategoryIdentifier::Trailer),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            CategoryIdentifier::FreightContainer => 'U',
            CategoryIdentifier::DetachableEquipment => 'J',
            CategoryIdentifier::Trailer => 'Z',
        }
    }
}

impl std::fmt::Display for CategoryIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Internal dimensions of a container, in millimeters, plus rounded volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDimension {
    pub length_mm: u32,
    pub width_mm: u32,
    pub height_mm: u32,
    /// Cubic meters, rounded to an integer.
    pub cbm: u32,
}

/// A structurally valid ISO 6346 serial, split into its parts.
///
/// `is_valid` only reports whether the check digit matches; structural
/// failures never produce a `ParsedSerial`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSerial {
    pub owner_code: String,
    pub category_identifier: CategoryIdentifier,
    pub serial_number: String,
    pub check_digit: u8,
    pub is_valid: bool,
}

impl ParsedSerial {
    /// Recompute the check digit the serial should carry.
    pub fn expected_check_digit(&self) -> Result<u8, ContainerError> {
        crate::serial::check_digit::calculate_check_digit(&self.check_window())
    }

    /// Owner code, category and serial number: the ten characters the check digit covers.
    pub fn check_window(&self) -> String {
        format!(
            "{}{}{}",
            self.owner_code, self.category_identifier, self.serial_number
        )
    }
}

impl std::fmt::Display for ParsedSerial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.check_window(), self.check_digit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Error,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Warn => write!(f, "warn"),
            Verdict::Error => write!(f, "error"),
        }
    }
}

/// One classified type designation, as rendered by the reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRecord {
    pub input: String,
    pub size: String,
    pub iso_code: Option<IsoCode>,
    pub tos_code: String,
    pub full_iso: String,
    pub high_cube: bool,
    pub dimensions: Option<ContainerDimension>,
    pub verdict: Verdict,
}

/// One checked serial, as rendered by the reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerialRecord {
    pub input: String,
    pub parsed: Option<ParsedSerial>,
    pub expected_check_digit: Option<u8>,
    pub verdict: Verdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_code_from_str() {
        assert_eq!("rc".parse::<IsoCode>().unwrap(), IsoCode::Reefer);
        assert_eq!(" HC ".parse::<IsoCode>().unwrap(), IsoCode::HighCube);
        assert!("XX".parse::<IsoCode>().is_err());
    }

    #[test]
    fn test_iso_code_serializes_as_code() {
        let json = serde_json::to_string(&IsoCode::FlatRack).unwrap();
        assert_eq!(json, "\"FR\"");
        let back: IsoCode = serde_json::from_str("\"UC\"").unwrap();
        assert_eq!(back, IsoCode::Uncontainerized);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<&str> = IsoCode::ALL.iter().map(|c| c.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn test_parsed_serial_display() {
        let parsed = ParsedSerial {
            owner_code: "TCL".to_string(),
            category_identifier: CategoryIdentifier::FreightContainer,
            serial_number: "702457".to_string(),
            check_digit: 4,
            is_valid: true,
        };
        assert_eq!(parsed.to_string(), "TCLU7024574");
        assert_eq!(parsed.expected_check_digit().unwrap(), 4);
    }
}
