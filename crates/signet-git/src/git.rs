//! `git` subprocess runner.
//!
//! All reads of the local checkout go through the `git` binary, one command
//! per read. Nothing here holds a snapshot across calls: `HEAD` may move
//! between [`Git::head_commit`] and [`Git::head_tree`].

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::diff::{ChangeRecord, parse_diff_index};
use crate::error::{Error, Result};
use crate::traits::GitOps;

/// Namespace every local branch ref lives under.
const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Runs git plumbing commands in a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
    verbose: bool,
}

impl Git {
    /// Create a runner for the given directory.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            verbose: false,
        }
    }

    /// Echo each command and its output to stdout.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run `git <args>` and return its stdout.
    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!(%command, workdir = %self.workdir.display(), "running git");

        if self.verbose {
            println!("[command]{command}");
        }

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| Error::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if self.verbose && !stdout.is_empty() {
            println!("{}", stdout.trim_end());
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::CommandFailed {
                command,
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(stdout)
    }

    /// Get the staged changes relative to `HEAD`.
    ///
    /// Paths with non-ASCII characters are printed as-is. Paths containing
    /// control characters, `"` or `\` are still C-quoted by git.
    ///
    /// # Errors
    /// Returns error if `git diff-index` fails or prints an unknown change kind.
    pub fn staged_changes(&self) -> Result<Vec<ChangeRecord>> {
        let stdout = self.run(&["-c", "core.quotePath=false", "diff-index", "--cached", "HEAD"])?;
        parse_diff_index(&stdout)
    }

    /// Get the name of the branch `HEAD` points at.
    ///
    /// # Errors
    /// Returns `UnexpectedOutput` if `HEAD` is not a local branch.
    pub fn head_branch(&self) -> Result<String> {
        let stdout = self.run(&["rev-parse", "--symbolic-full-name", "HEAD"])?;
        branch_from_symbolic_ref(&stdout)
    }

    /// Get the commit id of `HEAD`.
    ///
    /// # Errors
    /// Returns error if `git rev-parse` fails.
    pub fn head_commit(&self) -> Result<String> {
        Ok(self.run(&["rev-parse", "HEAD"])?.trim().to_string())
    }

    /// Get the tree id of the `HEAD` commit.
    ///
    /// # Errors
    /// Returns error if `git log` fails.
    pub fn head_tree(&self) -> Result<String> {
        Ok(self
            .run(&["log", "-1", "--format=%T", "HEAD"])?
            .trim()
            .to_string())
    }
}

/// Strip the branch namespace from `rev-parse --symbolic-full-name` output.
fn branch_from_symbolic_ref(output: &str) -> Result<String> {
    if !output.starts_with(BRANCH_REF_PREFIX) {
        return Err(Error::UnexpectedOutput {
            command: "git rev-parse".into(),
            output: output.to_string(),
        });
    }

    Ok(output.trim()[BRANCH_REF_PREFIX.len()..].to_string())
}

impl GitOps for Git {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn staged_changes(&self) -> Result<Vec<ChangeRecord>> {
        self.staged_changes()
    }

    fn head_branch(&self) -> Result<String> {
        self.head_branch()
    }

    fn head_commit(&self) -> Result<String> {
        self.head_commit()
    }

    fn head_tree(&self) -> Result<String> {
        self.head_tree()
    }
}
