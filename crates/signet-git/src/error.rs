//! Error types for signet-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during git operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not inside a git repository.
    #[error("not a git repository")]
    NotARepository,

    /// The git binary could not be spawned.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A git command exited unsuccessfully.
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// A git command printed something other than what was expected.
    #[error("Unexpected output from `{command}`: {output}")]
    UnexpectedOutput { command: String, output: String },

    /// A diff line carried a change letter other than A, D or M.
    #[error("unsupported change kind '{kind}' for {path}")]
    UnknownChangeKind { kind: char, path: String },

    /// Remote not found.
    #[error("remote not found: {0}")]
    RemoteNotFound(String),

    /// Invalid remote URL.
    #[error("invalid remote URL: {0}")]
    InvalidRemoteUrl(String),

    /// Underlying git2 error.
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),
}
