//! Trait abstractions for git operations.
//!
//! This module defines the `GitOps` trait which abstracts the reads signet
//! makes against the local checkout, enabling dependency injection and
//! testability.

use std::path::Path;

use crate::{ChangeRecord, Result};

/// Trait for reading the local checkout.
///
/// Note: git operations are synchronous; each call is an independent
/// point-in-time read.
#[allow(clippy::missing_errors_doc)]
pub trait GitOps {
    /// Directory the reads run in. Staged paths are read relative to it.
    fn workdir(&self) -> &Path;

    /// Get the staged changes relative to `HEAD`, in diff order.
    fn staged_changes(&self) -> Result<Vec<ChangeRecord>>;

    /// Get the current branch name, without the `refs/heads/` prefix.
    fn head_branch(&self) -> Result<String>;

    /// Get the commit id of `HEAD`.
    fn head_commit(&self) -> Result<String>;

    /// Get the tree id of the `HEAD` commit.
    fn head_tree(&self) -> Result<String>;
}
