//! Where the new commit goes.

use std::fmt;

/// Owner and name of the remote repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
}

impl RepoCoordinates {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// The branch to commit to and the tip the commit builds on.
///
/// `base_tree` and `parent_commit` are read separately from the local
/// checkout and are expected to describe the same commit. Nothing checks that
/// the remote branch is still at that commit; the ref update does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTarget {
    /// Branch name without the `refs/heads/` prefix.
    pub branch: String,
    /// Tree of the current tip. Paths not in the new tree keep this content.
    pub base_tree: String,
    /// Current tip; the sole parent of the new commit.
    pub parent_commit: String,
}

impl BranchTarget {
    /// Ref name as used by the update endpoint (`heads/<branch>`).
    #[must_use]
    pub fn update_ref_name(&self) -> String {
        format!("heads/{}", self.branch)
    }

    /// Fully qualified ref name as used by the create endpoint.
    #[must_use]
    pub fn full_ref_name(&self) -> String {
        format!("refs/heads/{}", self.branch)
    }
}
