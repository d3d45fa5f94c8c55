//! Core data models for datehist
//!
//! Defines the fundamental data structures used throughout datehist:
//! - `Frontmatter`: the YAML header block read from content files
//! - `DateSource`: which tier of the fallback chain produced a date
//! - `ResolvedDate`: the single date chosen for one file

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// YAML frontmatter extracted from content files
///
/// Only the `date` key is read; every other key is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Frontmatter {
    /// Publication date in `YYYY-MM-DD` form
    #[serde(default)]
    pub date: Option<String>,
}

/// Tier of the fallback chain that produced a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateSource {
    /// Frontmatter `date:` field
    Header,
    /// Leading `YYYY-MM-DD` filename prefix
    Filename,
    /// Last git commit touching the file
    Repo,
    /// Filesystem modification time (terminal tier)
    Mtime,
}

impl DateSource {
    /// Short name used in debug traces and JSON output
    pub fn name(self) -> &'static str {
        match self {
            DateSource::Header => "header",
            DateSource::Filename => "filename",
            DateSource::Repo => "repo",
            DateSource::Mtime => "mtime",
        }
    }
}

/// The single date chosen for one file after the fallback chain completes
///
/// Exactly one tier produces the date; it is never merged or re-validated
/// against the other tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDate {
    /// The resolved calendar date
    pub date: NaiveDate,
    /// The tier that produced it
    pub source: DateSource,
    /// The file it belongs to
    pub path: PathBuf,
}
