use tracing::{debug, trace};

use crate::iso::aliases::{ALIAS_RULES, CONTAINER_NAMES};
use crate::models::IsoCode;

/// Type code used in full designators when classification fails.
pub const UNKNOWN_TYPE_CODE: &str = "XX";

/// Trim and lowercase free text before matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classify free text (`"reefer"`, `"flt"`, `"40' hi-cube"`) into an ISO type group.
///
/// Rules are tried in priority order and the first match wins.
pub fn convert_iso(raw: &str) -> Option<IsoCode> {
    let normalized = normalize(raw);

    for (code, re) in ALIAS_RULES.iter() {
        trace!(%code, input = %normalized, "trying alias rule");
        if re.is_match(&normalized) {
            debug!(%code, input = %normalized, "classified container type");
            return Some(*code);
        }
    }

    debug!(input = %normalized, "container type unresolved");
    None
}

/// Resolved ISO code, or the raw input uppercased when unresolved.
pub fn convert_tos(raw: &str) -> String {
    match convert_iso(raw) {
        Some(code) => code.to_string(),
        None => raw.to_uppercase(),
    }
}

/// Full designator with size prefix, e.g. `full_iso("reefer", "45") == "45RC"`.
///
/// Unresolved input yields `{size}XX`.
pub fn full_iso(raw: &str, size: &str) -> String {
    let code = convert_iso(raw);
    format!(
        "{}{}",
        size,
        code.as_ref().map_or(UNKNOWN_TYPE_CODE, IsoCode::code)
    )
}

/// Loose High Cube heuristic.
///
/// True when the type resolves to HC, PW or RC, or when the text mentions
/// `hc` or `high` anywhere, even inside another word.
pub fn is_high_cube(raw: &str) -> bool {
    let normalized = normalize(raw);
    matches!(
        convert_iso(&normalized),
        Some(IsoCode::HighCube | IsoCode::PalletWide | IsoCode::Reefer)
    ) || normalized.contains("hc")
        || normalized.contains("high")
}

/// Exact name lookup, e.g. `"Flat Rack"` → FR.
pub fn iso_code_for_name(name: &str) -> Option<IsoCode> {
    let key = normalize(name);
    CONTAINER_NAMES
        .iter()
        .find(|(n, _)| *n == key)
        .map(|(_, code)| *code)
}

/// First table name mapped to a two-letter code, e.g. `"rc"` → `"reefer"`.
pub fn iso_code_name(code: &str) -> Option<&'static str> {
    let wanted = code.trim();
    CONTAINER_NAMES
        .iter()
        .find(|(_, c)| c.code().eq_ignore_ascii_case(wanted))
        .map(|(name, _)| *name)
}
