//! Report renderers.
//!
//! - [`terminal`] — colored tables with a summary box; respects `--quiet`.
//!
//! JSON output is produced directly from the serde-derived records in `main`.

pub mod terminal;
