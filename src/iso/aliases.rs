use std::sync::LazyLock;

use regex::Regex;

use crate::models::IsoCode;

/// Alias patterns in priority order. Classification returns the first hit, so
/// overlapping synonyms (`vh` is both HC and VT) resolve to the earlier rule.
const ALIAS_PATTERNS: [(IsoCode, &str); 16] = [
    (
        IsoCode::GeneralPurpose,
        r"gp|dc|dv|std|st|dry(?:\s?(?:van|container|cargo|box|storage))?|general\s?purpose",
    ),
    (
        IsoCode::HighCube,
        r"hc|hq|hcu|hi[-\s]?cube|high[-\s]?cube|highcube|high\s?container|vh",
    ),
    (
        IsoCode::Reefer,
        r"rf|rfr|ref|rc|hr|rhc|fhr|reefer|refrigerated|nor|cool|cold",
    ),
    (
        IsoCode::FlatRack,
        r"fr|flt|f/r|f-r|flat[-\s]?rack|flatrack|rack",
    ),
    (
        IsoCode::OpenTop,
        r"ot|op|opu|open[-\s]?top|hard[-\s]?top|soft[-\s]?top|o-t",
    ),
    (
        IsoCode::Tank,
        r"tk|tku|tank(?:tainer)?|tank[-\s]?container|iso[-\s]?tank|liquid[-\s]?container|t-c|tl",
    ),
    (IsoCode::Ventilated, r"vt|vc|vh|vent(?:ilated)?|vented"),
    (
        IsoCode::Platform,
        r"pl|plt|platform|fb|flat[-\s]?bed|flatbed",
    ),
    (
        IsoCode::Bulk,
        r"bu|bk|bulk(?:[-\s]?container)?|bulk[-\s]?cargo",
    ),
    (IsoCode::HalfHeight, r"hh|half[-\s]?height|halfheight"),
    (IsoCode::Liner, r"ln|liner(?:[-\s]?cargo)?|linerbag"),
    (IsoCode::PalletWide, r"pw|pallet[-\s]?wide|wide[-\s]?container"),
    (
        IsoCode::Insulated,
        r"in|ins|pc|tq|thermal|iso(?:thermal)?|insulated|cooling|passive[-\s]?cooling",
    ),
    (
        IsoCode::SideDoor,
        r"sd|os|open[-\s]?side|side[-\s]?door|side[-\s]?access|full[-\s]?side[-\s]?access",
    ),
    (IsoCode::Collapsible, r"cl|collapsible|foldable|folding"),
    (
        IsoCode::Uncontainerized,
        r"uc|un[-\s]?containerized|non[-\s]?containerized|break[-\s]?bulk|loose[-\s]?cargo|nocntr|none",
    ),
];

/// Compiled alias rules, in the same order as [`ALIAS_PATTERNS`].
///
/// Each alternation is wrapped in ASCII word boundaries and matched
/// case-insensitively, so `reefer集装箱` still hits the reefer rule.
pub static ALIAS_RULES: LazyLock<Vec<(IsoCode, Regex)>> = LazyLock::new(|| {
    ALIAS_PATTERNS
        .iter()
        .map(|(code, pattern)| {
            let re = Regex::new(&format!(r"(?i)(?-u:\b)(?:{})(?-u:\b)", pattern))
                .expect("valid container alias regex");
            (*code, re)
        })
        .collect()
});

/// Exact category names (lowercase) and the code each maps to.
///
/// Reverse lookups return the first name listed for a code, so the preferred
/// display name for each code comes first.
pub const CONTAINER_NAMES: &[(&str, IsoCode)] = &[
    ("general purpose", IsoCode::GeneralPurpose),
    ("dry container", IsoCode::GeneralPurpose),
    ("standard", IsoCode::GeneralPurpose),
    ("high cube", IsoCode::HighCube),
    ("vh", IsoCode::HighCube),
    ("reefer", IsoCode::Reefer),
    ("refrigerated", IsoCode::Reefer),
    ("nor", IsoCode::Reefer),
    ("cool", IsoCode::Reefer),
    ("cold", IsoCode::Reefer),
    ("flat rack", IsoCode::FlatRack),
    ("rack", IsoCode::FlatRack),
    ("open top", IsoCode::OpenTop),
    ("soft top", IsoCode::OpenTop),
    ("hard top", IsoCode::OpenTop),
    ("tank", IsoCode::Tank),
    ("tanktainer", IsoCode::Tank),
    ("lined tank", IsoCode::Tank),
    ("ventilated", IsoCode::Ventilated),
    ("platform", IsoCode::Platform),
    ("flatbed", IsoCode::Platform),
    ("bulk", IsoCode::Bulk),
    ("half height", IsoCode::HalfHeight),
    ("liner", IsoCode::Liner),
    ("liner cargo", IsoCode::Liner),
    ("liner bag", IsoCode::Liner),
    ("pallet wide", IsoCode::PalletWide),
    ("insulated", IsoCode::Insulated),
    ("thermal", IsoCode::Insulated),
    ("isothermal", IsoCode::Insulated),
    ("passive cooling", IsoCode::Insulated),
    ("side door", IsoCode::SideDoor),
    ("open side", IsoCode::SideDoor),
    ("collapsible", IsoCode::Collapsible),
    ("folding", IsoCode::Collapsible),
    ("uncontainerized", IsoCode::Uncontainerized),
    ("break bulk", IsoCode::Uncontainerized),
    ("loose cargo", IsoCode::Uncontainerized),
    ("none", IsoCode::Uncontainerized),
];

/// All names mapped to `code`, in table order.
pub fn names_for(code: IsoCode) -> impl Iterator<Item = &'static str> {
    CONTAINER_NAMES
        .iter()
        .filter(move |(_, c)| *c == code)
        .map(|(name, _)| *name)
}
