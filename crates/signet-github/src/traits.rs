//! Trait abstractions for GitHub API operations.
//!
//! This module defines the `GitHubApi` trait which abstracts the Git Data
//! endpoints signet uses, enabling dependency injection and testability.

use crate::{
    CreateBlob, CreateCommit, CreateRef, CreateTree, GitObject, GitReference, Result, UpdateRef,
};

/// Trait for GitHub Git Data API operations.
///
/// This trait abstracts GitHub API calls, allowing for:
/// - Dependency injection in commands/services
/// - Mock implementations for testing
///
/// All methods take `owner` and `repo` as parameters to support
/// operations across different repositories.
pub trait GitHubApi: Send + Sync {
    // === Objects ===

    /// Create a blob.
    fn create_blob(
        &self,
        owner: &str,
        repo: &str,
        blob: &CreateBlob,
    ) -> impl std::future::Future<Output = Result<GitObject>> + Send;

    /// Create a tree, optionally on top of a base tree.
    fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        tree: &CreateTree,
    ) -> impl std::future::Future<Output = Result<GitObject>> + Send;

    /// Create a commit.
    fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &CreateCommit,
    ) -> impl std::future::Future<Output = Result<GitObject>> + Send;

    // === Ref Operations ===

    /// Move an existing reference (`ref_name` like `heads/main`).
    ///
    /// Fails with [`crate::Error::RefNotFound`] if the reference does not exist.
    fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_name: &str,
        update: &UpdateRef,
    ) -> impl std::future::Future<Output = Result<GitReference>> + Send;

    /// Create a reference.
    fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        create: &CreateRef,
    ) -> impl std::future::Future<Output = Result<GitReference>> + Send;
}
