//! ISO 6346 container serial numbers.
//!
//! - [`check_digit`] — the mod-11 check digit over the first ten characters.
//! - [`parser`] — splits a serial into owner code, category, serial number and
//!   check digit, and reports whether the check digit matches.

pub mod check_digit;
pub mod parser;
