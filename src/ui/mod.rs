//! Terminal presentation for datehist
//!
//! - `terminal`: capability detection (TTY, color, unicode, CI)
//! - `theme`: semantic color and glyph tokens
//! - `chart`: bar chart, list and summary renderers
//! - `json`: NDJSON event output for CI

pub mod chart;
pub mod json;
pub mod terminal;
pub mod theme;
