//! Recording mock of the GitHub API for reconciler and uploader tests.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use signet_github::{
    CreateBlob, CreateCommit, CreateRef, CreateTree, Error as GitHubError, GitHubApi, GitObject,
    GitReference, Result as GitHubResult, UpdateRef,
};

/// A request received by [`MockGitHub`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateBlob(CreateBlob),
    CreateTree(CreateTree),
    CreateCommit(CreateCommit),
    UpdateRef(String, UpdateRef),
    CreateRef(CreateRef),
}

/// How the mock answers `update_ref`.
#[derive(Debug, Clone)]
pub enum RefUpdate {
    Succeed,
    Missing,
    Fail { status: u16, message: String },
}

pub struct MockGitHub {
    pub calls: Mutex<Vec<Call>>,
    pub ref_update: RefUpdate,
    pub fail_blobs: bool,
    pub stalled_blob: Option<String>,
    pub fail_create_ref: bool,
}

impl MockGitHub {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            ref_update: RefUpdate::Succeed,
            fail_blobs: false,
            stalled_blob: None,
            fail_create_ref: false,
        }
    }

    pub fn with_ref_update(mut self, behavior: RefUpdate) -> Self {
        self.ref_update = behavior;
        self
    }

    pub const fn with_blob_failure(mut self) -> Self {
        self.fail_blobs = true;
        self
    }

    /// Never answer the upload of this content.
    pub fn with_stalled_blob(mut self, content: &[u8]) -> Self {
        self.stalled_blob = Some(CreateBlob::base64(content).content);
        self
    }

    pub const fn with_create_ref_failure(mut self) -> Self {
        self.fail_create_ref = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    /// Blob ids are derived from the uploaded content.
    pub fn blob_sha(blob: &CreateBlob) -> String {
        format!("blob:{}", blob.content)
    }
}

fn reference(ref_name: &str, sha: &str) -> GitReference {
    GitReference {
        ref_name: ref_name.to_string(),
        object: GitObject {
            sha: sha.to_string(),
        },
    }
}

impl GitHubApi for MockGitHub {
    async fn create_blob(&self, _owner: &str, _repo: &str, blob: &CreateBlob) -> GitHubResult<GitObject> {
        self.record(Call::CreateBlob(blob.clone()));
        if self.stalled_blob.as_ref() == Some(&blob.content) {
            std::future::pending::<()>().await;
        }
        if self.fail_blobs {
            return Err(GitHubError::ApiError {
                status: 403,
                message: "Resource not accessible by integration".into(),
            });
        }
        Ok(GitObject {
            sha: Self::blob_sha(blob),
        })
    }

    async fn create_tree(&self, _owner: &str, _repo: &str, tree: &CreateTree) -> GitHubResult<GitObject> {
        self.record(Call::CreateTree(tree.clone()));
        Ok(GitObject {
            sha: "tree-sha".into(),
        })
    }

    async fn create_commit(
        &self,
        _owner: &str,
        _repo: &str,
        commit: &CreateCommit,
    ) -> GitHubResult<GitObject> {
        self.record(Call::CreateCommit(commit.clone()));
        Ok(GitObject {
            sha: "commit-sha".into(),
        })
    }

    async fn update_ref(
        &self,
        _owner: &str,
        _repo: &str,
        ref_name: &str,
        update: &UpdateRef,
    ) -> GitHubResult<GitReference> {
        self.record(Call::UpdateRef(ref_name.to_string(), update.clone()));
        match &self.ref_update {
            RefUpdate::Succeed => Ok(reference(&format!("refs/{ref_name}"), &update.sha)),
            RefUpdate::Missing => Err(GitHubError::RefNotFound(ref_name.to_string())),
            RefUpdate::Fail { status, message } => Err(GitHubError::ApiError {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    async fn create_ref(&self, _owner: &str, _repo: &str, create: &CreateRef) -> GitHubResult<GitReference> {
        self.record(Call::CreateRef(create.clone()));
        if self.fail_create_ref {
            return Err(GitHubError::ApiError {
                status: 422,
                message: "Reference already exists".into(),
            });
        }
        Ok(reference(&create.ref_name, &create.sha))
    }
}
