//! Commit service for publishing the staged changes as one remote commit.
//!
//! The run is split in two: `prepare` reads the checkout, and the returned
//! `PendingCommit` is published through any `GitHubApi`. Repository
//! coordinates and the API client are only needed for the second half.

use signet_core::{
    BranchTarget, Error, RepoCoordinates, Result, RunOutcome, TreeEntry, build_tree, publish,
    upload_blobs,
};
use signet_git::GitOps;
use signet_github::GitHubApi;
use tracing::debug;

/// Settings of one commit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitConfig {
    /// Commit message.
    pub message: String,
    /// Branch to commit to. Defaults to the checked-out branch.
    pub ref_name: Option<String>,
    /// Allow a non-fast-forward ref update.
    pub force: bool,
    /// Treat an empty change set as an error.
    pub fail_on_no_changes: bool,
}

/// Staged changes read from the checkout, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommit {
    target: BranchTarget,
    entries: Vec<TreeEntry>,
}

impl PendingCommit {
    /// Branch the commit goes to.
    pub fn branch(&self) -> &str {
        &self.target.branch
    }

    /// Upload the blobs, create the tree and commit, then move the branch.
    ///
    /// # Errors
    /// Returns the first API error.
    #[allow(clippy::future_not_send)]
    pub async fn publish<H: GitHubApi>(
        mut self,
        github: &H,
        repo: &RepoCoordinates,
        config: &CommitConfig,
    ) -> Result<RunOutcome> {
        debug!(
            branch = %self.target.branch,
            parent = %self.target.parent_commit,
            entries = self.entries.len(),
            "committing"
        );

        let uploaded = upload_blobs(github, repo, &mut self.entries).await?;
        debug!(uploaded, "blobs uploaded");

        publish(
            github,
            repo,
            &self.target,
            &self.entries,
            &config.message,
            config.force,
        )
        .await
    }
}

/// Service for commit operations with injected dependencies.
pub struct CommitService<'a, G: GitOps> {
    git: &'a G,
}

impl<'a, G: GitOps> CommitService<'a, G> {
    /// Create a new commit service.
    pub const fn new(git: &'a G) -> Self {
        Self { git }
    }

    /// Read everything the commit needs from the checkout: target branch,
    /// staged changes, file contents, head tree and head commit.
    ///
    /// Returns `None` for an empty change set when `fail_on_no_changes` is
    /// unset. Nothing here talks to GitHub.
    ///
    /// # Errors
    /// Returns `NoChanges` for an empty change set when `fail_on_no_changes`
    /// is set, otherwise the first git or file error.
    pub fn prepare(&self, config: &CommitConfig) -> Result<Option<PendingCommit>> {
        let branch = match &config.ref_name {
            Some(name) => name.clone(),
            None => self.git.head_branch()?,
        };

        let changes = self.git.staged_changes()?;
        let entries = build_tree(&changes, self.git.workdir())?;

        if entries.is_empty() {
            if config.fail_on_no_changes {
                return Err(Error::NoChanges);
            }
            return Ok(None);
        }

        let target = BranchTarget {
            branch,
            base_tree: self.git.head_tree()?,
            parent_commit: self.git.head_commit()?,
        };

        Ok(Some(PendingCommit { target, entries }))
    }
}
