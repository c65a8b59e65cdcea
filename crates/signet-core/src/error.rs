//! Error types for signet-core.

use std::path::PathBuf;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building and publishing a commit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A deleted path had no mode before the change.
    #[error("Unexpected mode for deleted file")]
    UnexpectedDeletedMode {
        /// Path of the offending change.
        path: String,
    },

    /// An added or modified path has no mode after the change.
    #[error("Unexpected mode for file")]
    UnexpectedMode {
        /// Path of the offending change.
        path: String,
    },

    /// A staged file could not be read from the working tree.
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tree entry still carried inline bytes when the tree was created.
    #[error("content for {0} was not uploaded")]
    ContentNotUploaded(String),

    /// There are no staged changes.
    #[error("No changes found to commit")]
    NoChanges,

    /// Git operation error.
    #[error(transparent)]
    Git(#[from] signet_git::Error),

    /// GitHub API error.
    #[error(transparent)]
    GitHub(#[from] signet_github::Error),
}
