//! GitHub Git Data API types.

use serde::{Deserialize, Serialize};

/// Transfer encoding of blob content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlobEncoding {
    /// Content is base64-encoded bytes.
    #[serde(rename = "base64")]
    Base64,
}

/// Request to create a blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateBlob {
    /// Blob content in the given encoding.
    pub content: String,

    /// How `content` is encoded.
    pub encoding: BlobEncoding,
}

impl CreateBlob {
    /// Build a request for arbitrary bytes, base64-encoded.
    #[must_use]
    pub fn base64(bytes: &[u8]) -> Self {
        use base64::Engine as _;

        Self {
            content: base64::engine::general_purpose::STANDARD.encode(bytes),
            encoding: BlobEncoding::Base64,
        }
    }
}

/// One entry of a tree creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTreeEntry {
    /// Path relative to the repository root.
    pub path: String,

    /// Six-digit file mode.
    pub mode: String,

    /// Object type of the entry.
    #[serde(rename = "type")]
    pub object_type: String,

    /// Blob id of the content. `None` serializes as `"sha": null`, which
    /// removes the path from the base tree.
    pub sha: Option<String>,
}

/// Request to create a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTree {
    /// Entries to apply on top of `base_tree`.
    pub tree: Vec<NewTreeEntry>,

    /// Tree the entries are merged onto. Paths not listed keep their content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_tree: Option<String>,
}

/// Request to create a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCommit {
    /// Commit message.
    pub message: String,

    /// Tree id of the commit.
    pub tree: String,

    /// Parent commit ids.
    pub parents: Vec<String>,
}

/// Request to move an existing reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRef {
    /// Commit id to point the reference at.
    pub sha: String,

    /// Allow non-fast-forward updates.
    pub force: bool,
}

/// Request to create a reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRef {
    /// Fully qualified reference name (e.g. `refs/heads/main`).
    #[serde(rename = "ref")]
    pub ref_name: String,

    /// Commit id the reference points at.
    pub sha: String,
}

/// A created git object (blob, tree or commit).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitObject {
    /// Object id.
    pub sha: String,
}

/// A git reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitReference {
    /// Fully qualified reference name.
    #[serde(rename = "ref")]
    pub ref_name: String,

    /// Object the reference points at.
    pub object: GitObject,
}
