//! Creating the commit and pointing the branch at it.
//!
//! The branch ref is moved optimistically: the update is attempted first and
//! only a "reference does not exist" failure falls back to creating the ref.
//! Nothing is locked between reading the branch tip and the update; the API's
//! fast-forward check (skipped when forcing) is the only guard.

use signet_github::{CreateCommit, CreateRef, CreateTree, Error as GitHubError, GitHubApi, UpdateRef};
use tracing::debug;

use crate::error::Result;
use crate::target::{BranchTarget, RepoCoordinates};
use crate::tree::TreeEntry;

/// How the branch ref was moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefOperation {
    /// The branch existed and now points at the new commit.
    Updated,
    /// The branch did not exist and was created at the new commit.
    Created,
}

impl RefOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Created => "created",
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Id of the new commit.
    pub sha: String,
    /// Branch that now points at it.
    pub branch: String,
    pub ref_operation: RefOperation,
    /// Commit message, echoed back.
    pub message: String,
}

/// Create a tree and commit from `entries` on top of `target`, then move the
/// branch to the new commit.
///
/// Entries must already be uploaded (see [`crate::upload_blobs`]). Objects
/// created before a failure are left in place, unreferenced.
///
/// # Errors
/// Returns the first API error, except a missing ref on update, which is
/// handled by creating the ref.
pub async fn publish<H: GitHubApi>(
    api: &H,
    repo: &RepoCoordinates,
    target: &BranchTarget,
    entries: &[TreeEntry],
    message: &str,
    force: bool,
) -> Result<RunOutcome> {
    let tree = CreateTree {
        tree: entries
            .iter()
            .map(TreeEntry::to_request)
            .collect::<Result<_>>()?,
        base_tree: Some(target.base_tree.clone()),
    };
    let tree = api.create_tree(&repo.owner, &repo.repo, &tree).await?;
    debug!(sha = %tree.sha, "created tree");

    let commit = CreateCommit {
        message: message.to_string(),
        tree: tree.sha,
        parents: vec![target.parent_commit.clone()],
    };
    let commit = api.create_commit(&repo.owner, &repo.repo, &commit).await?;
    debug!(sha = %commit.sha, "created commit");

    let ref_operation = move_branch(api, repo, target, &commit.sha, force).await?;

    Ok(RunOutcome {
        sha: commit.sha,
        branch: target.branch.clone(),
        ref_operation,
        message: message.to_string(),
    })
}

/// Point the branch at `sha`, creating the branch if it does not exist.
async fn move_branch<H: GitHubApi>(
    api: &H,
    repo: &RepoCoordinates,
    target: &BranchTarget,
    sha: &str,
    force: bool,
) -> Result<RefOperation> {
    let update = UpdateRef {
        sha: sha.to_string(),
        force,
    };

    match api
        .update_ref(&repo.owner, &repo.repo, &target.update_ref_name(), &update)
        .await
    {
        Ok(_) => {
            debug!(branch = %target.branch, %sha, "updated ref");
            Ok(RefOperation::Updated)
        }
        Err(GitHubError::RefNotFound(_)) => {
            let create = CreateRef {
                ref_name: target.full_ref_name(),
                sha: sha.to_string(),
            };
            api.create_ref(&repo.owner, &repo.repo, &create).await?;
            debug!(branch = %target.branch, %sha, "created ref");
            Ok(RefOperation::Created)
        }
        Err(e) => {
            debug!(status = ?e.status(), "ref update failed");
            Err(e.into())
        }
    }
}
