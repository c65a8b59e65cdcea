//! Mapping staged changes to remote tree entries.

use std::path::Path;

use signet_git::{ChangeKind, ChangeRecord, FileMode, ObjectId, Side};
use signet_github::NewTreeEntry;

use crate::error::{Error, Result};

/// Object type of every entry signet writes.
pub const BLOB: &str = "blob";

/// What a tree entry sets its path to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryContent {
    /// New bytes that still have to be uploaded as a blob.
    Inline(Vec<u8>),
    /// An existing blob, reused as-is.
    Reference(ObjectId),
    /// Remove the path.
    Delete,
}

/// One path in the tree submitted to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    /// Never the absent mode. Deletions carry the mode the file had.
    pub mode: FileMode,
    pub content: EntryContent,
}

impl TreeEntry {
    /// Whether this entry still needs its content uploaded.
    #[must_use]
    pub const fn needs_upload(&self) -> bool {
        matches!(self.content, EntryContent::Inline(_))
    }

    /// Convert to an API tree entry.
    ///
    /// # Errors
    /// Returns `ContentNotUploaded` for entries still carrying inline bytes.
    pub fn to_request(&self) -> Result<NewTreeEntry> {
        let sha = match &self.content {
            EntryContent::Inline(_) => return Err(Error::ContentNotUploaded(self.path.clone())),
            EntryContent::Reference(id) => Some(id.to_string()),
            EntryContent::Delete => None,
        };

        Ok(NewTreeEntry {
            path: self.path.clone(),
            mode: self.mode.to_string(),
            object_type: BLOB.to_string(),
            sha,
        })
    }
}

/// Build the tree entry for one change.
///
/// Files whose content id did not change (a mode-only change) reference the
/// existing blob and are not read. Other added or modified files are read
/// from `root.join(path)`.
///
/// # Errors
/// Returns a validation error if the change lacks the mode it needs, or
/// `ReadFile` if the file cannot be read.
pub fn build_entry(record: &ChangeRecord, root: &Path) -> Result<TreeEntry> {
    if record.kind == ChangeKind::Deleted {
        let Side::Present { mode, .. } = record.old_side() else {
            return Err(Error::UnexpectedDeletedMode {
                path: record.path.clone(),
            });
        };

        return Ok(TreeEntry {
            path: record.path.clone(),
            mode: mode.clone(),
            content: EntryContent::Delete,
        });
    }

    let Side::Present { mode, id } = record.new_side() else {
        return Err(Error::UnexpectedMode {
            path: record.path.clone(),
        });
    };

    let content = if record.old_id == *id {
        EntryContent::Reference(id.clone())
    } else {
        let path = root.join(&record.path);
        let bytes = std::fs::read(&path).map_err(|source| Error::ReadFile { path, source })?;
        EntryContent::Inline(bytes)
    };

    Ok(TreeEntry {
        path: record.path.clone(),
        mode: mode.clone(),
        content,
    })
}

/// Build tree entries for all changes, keeping their order.
///
/// # Errors
/// Returns the first error from [`build_entry`].
pub fn build_tree(records: &[ChangeRecord], root: &Path) -> Result<Vec<TreeEntry>> {
    records.iter().map(|r| build_entry(r, root)).collect()
}
