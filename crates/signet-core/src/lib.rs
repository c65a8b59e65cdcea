//! # signet-core
//!
//! Turns a list of staged changes into a single commit created through the
//! GitHub Git Data API:
//!
//! 1. [`build_tree`] maps each change to a tree entry (inline bytes, an
//!    existing blob id, or a deletion).
//! 2. [`upload_blobs`] uploads inline bytes as blobs and swaps in their ids.
//! 3. [`publish`] creates the tree and commit, then updates the branch ref or
//!    creates it if it does not exist yet.

pub mod commit;
pub mod error;
pub mod target;
pub mod tree;
pub mod upload;

#[cfg(test)]
mod test_mocks;

pub use commit::{RefOperation, RunOutcome, publish};
pub use error::{Error, Result};
pub use target::{BranchTarget, RepoCoordinates};
pub use tree::{EntryContent, TreeEntry, build_entry, build_tree};
pub use upload::upload_blobs;
