//! Common test utilities for datehist CLI tests.
//!
//! - `ContentDir`: isolated content directory built on a tempdir
//! - `run`: drive the built binary with a pinned terminal environment
//! - git fixture helpers with pinned commit dates

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Path to the built datehist binary
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_datehist")
}

/// Run the binary against `dir` with extra args, pinning the terminal env
/// so output is stable regardless of the host shell.
pub fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .arg(dir)
        .args(args)
        .env("TERM", "xterm-256color")
        .env("LANG", "en_US.UTF-8")
        .env_remove("NO_COLOR")
        .output()
        .expect("datehist should run")
}

/// Isolated content directory fixture
pub struct ContentDir {
    dir: TempDir,
}

impl ContentDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file under the content root.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Write a post whose frontmatter carries `date`.
    pub fn write_post(&self, name: &str, date: &str) -> PathBuf {
        self.write(name, &format!("---\ndate: {}\n---\n# Post\n", date))
    }
}

/// Whether a usable git binary is on the search path.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Initialize a git repo at `dir` and commit everything with a pinned
/// author/committer date.
pub fn git_commit_all(dir: &Path, date: &str) {
    let git = |args: &[&str]| {
        let out = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(args)
            .env("GIT_AUTHOR_NAME", "tester")
            .env("GIT_AUTHOR_EMAIL", "tester@example.com")
            .env("GIT_COMMITTER_NAME", "tester")
            .env("GIT_COMMITTER_EMAIL", "tester@example.com")
            .env("GIT_AUTHOR_DATE", date)
            .env("GIT_COMMITTER_DATE", date)
            .output()
            .expect("git should run");
        assert!(
            out.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&out.stderr)
        );
    };

    git(&["init", "-q"]);
    git(&["add", "."]);
    git(&["commit", "-q", "-m", "fixture"]);
}
