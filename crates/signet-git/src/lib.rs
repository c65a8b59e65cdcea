//! # signet-git
//!
//! Git plumbing for signet. Reads the staged change set and the current
//! `HEAD` position by shelling out to the `git` binary, and discovers the
//! `origin` remote through git2-rs.

mod diff;
mod error;
mod git;
mod repository;
mod traits;

pub use diff::{ChangeKind, ChangeRecord, FileMode, ObjectId, Side, parse_diff_index};
pub use error::{Error, Result};
pub use git::Git;
pub use repository::Repository;
pub use traits::GitOps;
