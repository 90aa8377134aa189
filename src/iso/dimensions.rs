use crate::iso::classifier::convert_iso;
use crate::models::{ContainerDimension, IsoCode};

const fn dim(length_mm: u32, width_mm: u32, height_mm: u32, cbm: u32) -> ContainerDimension {
    ContainerDimension {
        length_mm,
        width_mm,
        height_mm,
        cbm,
    }
}

/// Look up dimensions by full designator (`"40HC"`), case-insensitive.
pub fn dimensions_by_key(key: &str) -> Option<ContainerDimension> {
    match key.to_uppercase().as_str() {
        "20GP" => Some(dim(5898, 2352, 2390, 33)),
        "20HC" => Some(dim(5898, 2352, 2690, 37)),
        "20RC" => Some(dim(5450, 2260, 2260, 27)),
        "40GP" => Some(dim(12032, 2352, 2390, 67)),
        "40HC" => Some(dim(12032, 2352, 2690, 76)),
        "40RC" => Some(dim(11500, 2290, 2300, 60)),
        "45HC" => Some(dim(13556, 2352, 2690, 86)),
        "40FR" => Some(dim(12192, 2438, 2591, 76)),
        "20FR" => Some(dim(6058, 2438, 2591, 33)),
        "45RC" => Some(dim(13000, 2300, 2500, 75)),
        _ => None,
    }
}

/// Dimensions for a known type group and size prefix.
pub fn dimensions_for(code: IsoCode, size: &str) -> Option<ContainerDimension> {
    dimensions_by_key(&format!("{}{}", size, code))
}

/// Volume in cubic meters for a known type group and size prefix.
pub fn cbm_for(code: IsoCode, size: &str) -> Option<u32> {
    dimensions_for(code, size).map(|d| d.cbm)
}

/// Classify free text, then look up its dimensions.
pub fn get_dimensions(raw: &str, size: &str) -> Option<ContainerDimension> {
    convert_iso(raw).and_then(|code| dimensions_for(code, size))
}

/// Classify free text, then look up its volume.
pub fn get_cbm(raw: &str, size: &str) -> Option<u32> {
    get_dimensions(raw, size).map(|d| d.cbm)
}
