//! Header tier: frontmatter date extraction
//!
//! Handles detection of a leading YAML frontmatter block and strict parsing
//! of its `date` key. This tier never fails hard: malformed blocks, invalid
//! YAML, unreadable files and out-of-form dates all decline so the chain can
//! fall through.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::models::Frontmatter;

/// Delimiter for frontmatter sections
const FRONTMATTER_DELIMITER: &str = "---";

/// Date format accepted from the `date:` key
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read a file's frontmatter `date:` as a calendar date.
///
/// The file is decoded lossily, so invalid UTF-8 sequences are dropped
/// rather than declining the whole tier.
pub fn header_date(path: &Path) -> Option<NaiveDate> {
    let bytes = fs::read(path).ok()?;
    let content = String::from_utf8_lossy(&bytes);
    let yaml = extract_frontmatter(&content)?;
    parse_header_date(&yaml)
}

/// Extract the YAML content of a leading frontmatter block.
///
/// The block must open on the first line with `---` and be closed by a
/// second `---` line. The body after the close is not required.
///
/// # Example
/// ```text
/// ---
/// date: 2021-05-01
/// ---
/// # Post content here
/// ```
pub fn extract_frontmatter(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if lines.next()?.trim() != FRONTMATTER_DELIMITER {
        return None;
    }

    let mut yaml = Vec::new();
    for line in lines {
        if line.trim() == FRONTMATTER_DELIMITER {
            return Some(yaml.join("\n"));
        }
        yaml.push(line);
    }

    // Opening delimiter without a close
    None
}

/// Parse frontmatter YAML and read its `date` key strictly as `YYYY-MM-DD`.
pub fn parse_header_date(yaml: &str) -> Option<NaiveDate> {
    let meta: Frontmatter = serde_yaml_ng::from_str(yaml).ok()?;
    let value = meta.date?;
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}
