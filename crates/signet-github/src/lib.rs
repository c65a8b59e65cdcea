//! # signet-github
//!
//! Client for the GitHub Git Data API: blobs, trees, commits and refs.
//!
//! # Security
//!
//! Authentication tokens are stored using `SecretString` which automatically
//! zeroizes memory when dropped, reducing credential exposure in memory dumps.

mod client;
mod error;
mod traits;
mod types;

pub use client::GitHubClient;
pub use error::{Error, Result};
// Re-export SecretString for constructing a client
pub use secrecy::SecretString;
pub use traits::GitHubApi;
pub use types::{
    BlobEncoding, CreateBlob, CreateCommit, CreateRef, CreateTree, GitObject, GitReference,
    NewTreeEntry, UpdateRef,
};
