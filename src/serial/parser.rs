use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{CategoryIdentifier, ParsedSerial};
use crate::serial::check_digit::calculate_check_digit;

/// Owner code, category identifier, six-digit serial, check digit.
static SERIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{3})([UJZ])([0-9]{6})([0-9])$").expect("valid serial regex")
});

/// Parse an ISO 6346 container number such as `"MSCU 123456 5"`.
///
/// Whitespace is stripped and letters uppercased before matching. Returns
/// `None` when the input does not have the serial's shape; a structurally
/// valid serial with a wrong check digit comes back with `is_valid == false`.
pub fn parse_container_number(code: &str) -> Option<ParsedSerial> {
    let cleaned: String = code
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    let Some(caps) = SERIAL_RE.captures(&cleaned) else {
        debug!(input = code, "not a container serial");
        return None;
    };

    let owner = &caps[1];
    let category = caps[2].chars().next().and_then(CategoryIdentifier::from_char)?;
    let serial = &caps[3];
    let check_digit = caps[4].parse::<u8>().ok()?;

    let window = format!("{}{}{}", owner, category, serial);
    let is_valid = calculate_check_digit(&window).is_ok_and(|expected| expected == check_digit);

    debug!(serial = %cleaned, is_valid, "parsed container serial");

    Some(ParsedSerial {
        owner_code: owner.to_string(),
        category_identifier: category,
        serial_number: serial.to_string(),
        check_digit,
        is_valid,
    })
}

/// `true` only when the serial parses and its check digit matches.
pub fn validate_container_number(code: &str) -> bool {
    parse_container_number(code).is_some_and(|p| p.is_valid)
}
