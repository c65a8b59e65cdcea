//! Mock implementations for testing services.
//!
//! These mocks implement the traits from signet-git and signet-github to
//! enable unit testing of service logic without a real repository or API.

#![allow(clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use signet_git::{
    ChangeKind, ChangeRecord, Error as GitError, FileMode, GitOps, ObjectId, Result as GitResult,
};
use signet_github::{
    CreateBlob, CreateCommit, CreateRef, CreateTree, Error as GitHubError, GitHubApi, GitObject,
    GitReference, Result as GitHubResult, UpdateRef,
};

/// Build a change record from its raw fields.
pub fn record(
    old_mode: &str,
    new_mode: &str,
    old_id: &str,
    new_id: &str,
    kind: ChangeKind,
    path: &str,
) -> ChangeRecord {
    ChangeRecord {
        old_mode: FileMode::new(old_mode),
        new_mode: FileMode::new(new_mode),
        old_id: ObjectId::new(old_id),
        new_id: ObjectId::new(new_id),
        kind,
        path: path.to_string(),
    }
}

/// Mock implementation of `GitOps` for testing.
pub struct MockGitOps {
    pub workdir: PathBuf,
    pub branch: Option<String>,
    pub changes: RefCell<Vec<ChangeRecord>>,
    pub head_branch_calls: Cell<usize>,
}

impl MockGitOps {
    pub fn new() -> Self {
        Self {
            workdir: PathBuf::from("/nonexistent/signet/workdir"),
            branch: Some("main".to_string()),
            changes: RefCell::new(Vec::new()),
            head_branch_calls: Cell::new(0),
        }
    }

    pub fn with_workdir(mut self, path: &Path) -> Self {
        self.workdir = path.to_path_buf();
        self
    }

    pub fn with_detached_head(mut self) -> Self {
        self.branch = None;
        self
    }

    pub fn with_change(self, change: ChangeRecord) -> Self {
        self.changes.borrow_mut().push(change);
        self
    }

    pub fn head_branch_calls(&self) -> usize {
        self.head_branch_calls.get()
    }
}

impl GitOps for MockGitOps {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn staged_changes(&self) -> GitResult<Vec<ChangeRecord>> {
        Ok(self.changes.borrow().clone())
    }

    fn head_branch(&self) -> GitResult<String> {
        self.head_branch_calls.set(self.head_branch_calls.get() + 1);
        self.branch.clone().ok_or_else(|| GitError::UnexpectedOutput {
            command: "git rev-parse --symbolic-full-name HEAD".to_string(),
            output: "HEAD".to_string(),
        })
    }

    fn head_commit(&self) -> GitResult<String> {
        Ok("head-sha".to_string())
    }

    fn head_tree(&self) -> GitResult<String> {
        Ok("head-tree".to_string())
    }
}

/// A request received by [`MockGitHub`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateBlob(CreateBlob),
    CreateTree(CreateTree),
    CreateCommit(CreateCommit),
    UpdateRef(String, UpdateRef),
    CreateRef(CreateRef),
}

/// Mock implementation of `GitHubApi` that records every request.
///
/// Blobs get sequential ids (`blob-1`, `blob-2`, ...).
pub struct MockGitHub {
    calls: Mutex<Vec<Call>>,
    ref_missing: bool,
}

impl MockGitHub {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            ref_missing: false,
        }
    }

    pub const fn with_missing_ref(mut self) -> Self {
        self.ref_missing = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GitHubApi for MockGitHub {
    async fn create_blob(
        &self,
        _owner: &str,
        _repo: &str,
        blob: &CreateBlob,
    ) -> GitHubResult<GitObject> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(Call::CreateBlob(blob.clone()));
        let count = calls
            .iter()
            .filter(|c| matches!(c, Call::CreateBlob(_)))
            .count();
        Ok(GitObject {
            sha: format!("blob-{count}"),
        })
    }

    async fn create_tree(
        &self,
        _owner: &str,
        _repo: &str,
        tree: &CreateTree,
    ) -> GitHubResult<GitObject> {
        self.record(Call::CreateTree(tree.clone()));
        Ok(GitObject {
            sha: "tree-sha".to_string(),
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
            sha: "commit-sha".to_string(),
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
        if self.ref_missing {
            return Err(GitHubError::RefNotFound(ref_name.to_string()));
        }
        Ok(GitReference {
            ref_name: format!("refs/{ref_name}"),
            object: GitObject {
                sha: update.sha.clone(),
            },
        })
    }

    async fn create_ref(
        &self,
        _owner: &str,
        _repo: &str,
        create: &CreateRef,
    ) -> GitHubResult<GitReference> {
        self.record(Call::CreateRef(create.clone()));
        Ok(GitReference {
            ref_name: create.ref_name.clone(),
            object: GitObject {
                sha: create.sha.clone(),
            },
        })
    }
}
