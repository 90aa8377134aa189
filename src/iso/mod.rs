//! Free-text container type normalization to ISO 6346 type groups.
//!
//! - [`aliases`] — the ordered alias rules and the exact name table.
//! - [`classifier`] — first-match-wins classification and the helpers built on it.
//! - [`dimensions`] — internal dimensions and volume per size and type.

pub mod aliases;
pub mod classifier;
pub mod dimensions;
