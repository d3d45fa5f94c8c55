//! Date resolution: the four-tier fallback chain
//!
//! For every file in one directory matching an extension suffix, the tiers
//! run in priority order - frontmatter header, filename prefix, git history,
//! filesystem mtime - and the first one to produce a date wins. The mtime
//! tier always succeeds for a file that still exists, so each enumerated
//! file yields exactly one date.
//!
//! Resolution is lazy: a file's tiers (including its git subprocess, if it
//! gets that far) run only when the consumer advances the iterator. Dropping
//! the iterator abandons the remaining files.

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{DatehistError, DatehistResult};
use crate::models::{DateSource, ResolvedDate};
use crate::parser;
use crate::repo::RepoProbe;

/// Immutable context for one resolution run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Directory to scan (non-recursive)
    pub root: PathBuf,
    /// Extension suffix filter, e.g. `.md`
    pub ext: String,
    /// Trace every tier attempt to stderr
    pub debug: bool,
    /// Allow the repo tier to run (still requires git on the host)
    pub use_repo: bool,
}

impl ResolveOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ext: ".md".to_string(),
            debug: false,
            use_repo: true,
        }
    }
}

/// Tiers that can decline, in priority order. Mtime is the terminal tier
/// and is handled separately.
const CHAIN: &[DateSource] = &[DateSource::Header, DateSource::Filename, DateSource::Repo];

/// Resolve one date per matching file in `opts.root`.
///
/// Fails fast when the root is not a directory; after that, nothing aborts
/// the run - every per-file anomaly declines its tier and the chain falls
/// through to mtime.
pub fn resolve(opts: ResolveOptions) -> DatehistResult<Dates> {
    if !opts.root.is_dir() {
        return Err(DatehistError::NotADirectory { path: opts.root });
    }

    let probe = if opts.use_repo {
        RepoProbe::detect()
    } else {
        RepoProbe::disabled()
    };
    let entries = fs::read_dir(&opts.root)?;

    Ok(Dates {
        opts,
        probe,
        entries,
    })
}

/// Lazy stream of resolved dates, one per matching file, in filesystem
/// enumeration order.
#[derive(Debug)]
pub struct Dates {
    opts: ResolveOptions,
    probe: RepoProbe,
    entries: ReadDir,
}

impl Iterator for Dates {
    type Item = ResolvedDate;

    fn next(&mut self) -> Option<ResolvedDate> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            let path = entry.path();
            if !self.matches(&path) {
                continue;
            }
            if let Some(resolved) = self.resolve_file(&path) {
                return Some(resolved);
            }
        }
    }
}

impl Dates {
    fn matches(&self, path: &Path) -> bool {
        if path.is_dir() {
            return false;
        }
        path.file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(&self.opts.ext))
            .unwrap_or(false)
    }

    /// Run the chain for one file. Returns `None` only when the file
    /// vanished between enumeration and the mtime read.
    fn resolve_file(&self, path: &Path) -> Option<ResolvedDate> {
        for &source in CHAIN {
            if source == DateSource::Repo && !self.probe.is_available() {
                continue;
            }
            let date = self.attempt(source, path);
            self.trace(source, path, date);
            if let Some(date) = date {
                return Some(ResolvedDate {
                    date,
                    source,
                    path: path.to_path_buf(),
                });
            }
        }

        let date = mtime_date(path)?;
        self.trace(DateSource::Mtime, path, Some(date));
        Some(ResolvedDate {
            date,
            source: DateSource::Mtime,
            path: path.to_path_buf(),
        })
    }

    fn attempt(&self, source: DateSource, path: &Path) -> Option<NaiveDate> {
        match source {
            DateSource::Header => parser::header_date(path),
            DateSource::Filename => filename_date(path),
            DateSource::Repo => self.probe.commit_date(path),
            DateSource::Mtime => mtime_date(path),
        }
    }

    fn trace(&self, source: DateSource, path: &Path, date: Option<NaiveDate>) {
        if !self.opts.debug {
            return;
        }
        match date {
            Some(date) => eprintln!("{} {} {}", source.name(), path.display(), date),
            None => eprintln!("{} {} declined", source.name(), path.display()),
        }
    }
}

/// Filename tier: the first 10 characters of the file name as `YYYY-MM-DD`.
///
/// Names shorter than 10 bytes, or whose 10-byte prefix is not a char
/// boundary, decline rather than erroring.
pub fn filename_date(path: &Path) -> Option<NaiveDate> {
    let name = path.file_name()?.to_str()?;
    let prefix = name.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Mtime tier: the file's last-modified timestamp as a UTC calendar date.
fn mtime_date(path: &Path) -> Option<NaiveDate> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified).date_naive())
}
