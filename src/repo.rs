//! Repo tier: last-commit dates via the git binary
//!
//! The host's `git` is probed once per run; each file query then shells out
//! to `git log -1` scoped to the file's parent directory. This is the only
//! module that spawns subprocesses. The call blocks until git exits; no
//! timeout is enforced.

use std::path::Path;
use std::process::{Command, Stdio};

use chrono::NaiveDate;

/// Availability of the host git binary, resolved once before any resolution
/// begins and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoProbe {
    available: bool,
}

impl RepoProbe {
    /// Probe for a usable `git` on the command search path.
    pub fn detect() -> Self {
        let available = Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false);

        Self { available }
    }

    /// A probe that always declines, for runs with the repo tier disabled.
    pub fn disabled() -> Self {
        Self { available: false }
    }

    pub fn is_available(self) -> bool {
        self.available
    }

    /// Date of the most recent commit touching `path`.
    ///
    /// Declines when git is unavailable, the target is not a regular file,
    /// the subprocess produces no usable output, or the date portion of the
    /// output fails to parse. Never raises.
    pub fn commit_date(self, path: &Path) -> Option<NaiveDate> {
        if !self.available || !path.is_file() {
            return None;
        }

        let parent = path.parent()?;
        let name = path.file_name()?;

        let output = Command::new("git")
            .arg("-C")
            .arg(parent)
            .arg("log")
            .arg("-1")
            .arg("--format=%cd")
            .arg("--date=iso")
            .arg("--")
            .arg(name)
            .stderr(Stdio::null())
            .output()
            .ok()?;

        // Output is `2019-03-02 10:00:00 +0000`; only the date portion is
        // wanted. Empty output (untracked file, not a repo) declines here.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let prefix = stdout.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}
