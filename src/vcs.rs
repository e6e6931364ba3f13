//! Git collaborator: status query, staging, and committing.

use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::process::Command;

/// Width of the porcelain status prefix: two status characters and a space.
const STATUS_PREFIX_LEN: usize = 3;

/// One path reported by the status query, status code stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntry {
    pub path: String,
}

/// The version-control operations the commit driver needs.
///
/// Backed by the git CLI in production; tests substitute a recording mock so
/// the driver runs without a repository.
pub trait Vcs {
    /// List uncommitted (modified or untracked) paths.
    fn status(&self) -> Result<Vec<ChangeEntry>>;
    /// Stage one path in the index.
    fn stage(&self, path: &str) -> Result<()>;
    /// Create a commit from the staged changes.
    fn commit(&self, message: &str) -> Result<()>;
}

/// `Vcs` implementation that shells out to the `git` binary, running every
/// command in the repository root.
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        GitCli { root: root.into() }
    }

    /// Run one git command to completion; non-zero exit is fatal and the
    /// error carries git's own stderr text.
    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .with_context(|| format!("Failed to run git {}", args.join(" ")))?;

        if !output.status.success() {
            bail!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(output.stdout)
    }
}

impl Vcs for GitCli {
    fn status(&self) -> Result<Vec<ChangeEntry>> {
        let stdout = self.run(&["status", "--porcelain"])?;
        Ok(parse_porcelain(&String::from_utf8_lossy(&stdout)))
    }

    fn stage(&self, path: &str) -> Result<()> {
        self.run(&["add", "--", path]).map(|_| ())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }
}

/// Strip the fixed-width status prefix from each porcelain line.
pub fn parse_porcelain(text: &str) -> Vec<ChangeEntry> {
    text.lines()
        .filter(|line| line.len() > STATUS_PREFIX_LEN)
        .map(|line| ChangeEntry {
            path: line[STATUS_PREFIX_LEN..].to_string(),
        })
        .collect()
}
