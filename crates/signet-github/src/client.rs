//! GitHub API client.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{Error, Result};
use crate::traits::GitHubApi;
use crate::types::{
    CreateBlob, CreateCommit, CreateRef, CreateTree, GitObject, GitReference, UpdateRef,
};

/// Message prefix GitHub uses when an updated reference does not exist.
const MISSING_REF_MESSAGE: &str = "Reference does not exist";

/// Error body returned by the REST API.
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// GitHub API client.
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: SecretString,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new GitHub client.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(token: SecretString) -> Result<Self> {
        Self::with_base_url(token, Self::DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub Enterprise).
    ///
    /// # Errors
    /// Returns `InvalidBaseUrl` if `base_url` is not an absolute URL that can
    /// carry a path, or an error if the HTTP client cannot be built.
    pub fn with_base_url(token: SecretString, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let base_url = Url::parse(&base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or(Error::InvalidBaseUrl(base_url))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("signet"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Build the URL of a repository's Git Data endpoint.
    ///
    /// Each segment is percent-encoded on its own, so characters such as `#`,
    /// `?` or `%` in a branch name stay part of the path.
    fn git_endpoint<'a>(
        &self,
        owner: &'a str,
        repo: &'a str,
        path: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["repos", owner, repo, "git"])
            .extend(path);
        Ok(url)
    }

    /// Make a POST request.
    #[instrument(level = "debug", skip(self, body))]
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a PATCH request.
    #[instrument(level = "debug", skip(self, body))]
    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        debug!(%url, "PATCH");
        let response = self
            .client
            .patch(url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response.
    ///
    /// Error variants carry GitHub's own message unchanged.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.json().await?;
            return Ok(body);
        }

        let rate_limited = status.as_u16() == 403
            && response
                .headers()
                .get("x-ratelimit-remaining")
                .is_some_and(|v| v == "0");

        let mut message = error_message(response.text().await.unwrap_or_default());
        if message.is_empty() {
            message = status.to_string();
        }

        match status.as_u16() {
            401 => Err(Error::AuthenticationFailed(message)),
            _ if rate_limited => Err(Error::RateLimited(message)),
            status => Err(Error::ApiError { status, message }),
        }
    }

    // === Objects ===

    /// Create a blob.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_blob(&self, owner: &str, repo: &str, blob: &CreateBlob) -> Result<GitObject> {
        self.post(self.git_endpoint(owner, repo, ["blobs"])?, blob)
            .await
    }

    /// Create a tree.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_tree(&self, owner: &str, repo: &str, tree: &CreateTree) -> Result<GitObject> {
        self.post(self.git_endpoint(owner, repo, ["trees"])?, tree)
            .await
    }

    /// Create a commit.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &CreateCommit,
    ) -> Result<GitObject> {
        self.post(self.git_endpoint(owner, repo, ["commits"])?, commit)
            .await
    }

    // === Ref Operations ===

    /// Move an existing reference.
    ///
    /// `ref_name` is relative to `refs/`, e.g. `heads/main`.
    ///
    /// # Errors
    /// Returns `RefNotFound` if the reference does not exist, or another error
    /// if the request fails (including a rejected non-fast-forward move).
    pub async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_name: &str,
        update: &UpdateRef,
    ) -> Result<GitReference> {
        let path = std::iter::once("refs").chain(ref_name.split('/'));
        self.patch(self.git_endpoint(owner, repo, path)?, update)
            .await
            .map_err(|e| match e {
                // GitHub reports a missing ref as a generic validation failure;
                // only the message tells it apart from other 422s.
                Error::ApiError {
                    status: 422,
                    ref message,
                } if message.starts_with(MISSING_REF_MESSAGE) => {
                    Error::RefNotFound(ref_name.to_string())
                }
                other => other,
            })
    }

    /// Create a reference.
    ///
    /// # Errors
    /// Returns error if the request fails (e.g. the reference already exists).
    pub async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        create: &CreateRef,
    ) -> Result<GitReference> {
        self.post(self.git_endpoint(owner, repo, ["refs"])?, create)
            .await
    }
}

/// Extract the `message` field of a JSON error body, or keep the raw text.
fn error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorBody>(&body).map_or(body, |parsed| parsed.message)
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

// === Trait Implementation ===

impl GitHubApi for GitHubClient {
    async fn create_blob(&self, owner: &str, repo: &str, blob: &CreateBlob) -> Result<GitObject> {
        self.create_blob(owner, repo, blob).await
    }

    async fn create_tree(&self, owner: &str, repo: &str, tree: &CreateTree) -> Result<GitObject> {
        self.create_tree(owner, repo, tree).await
    }

    async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        commit: &CreateCommit,
    ) -> Result<GitObject> {
        self.create_commit(owner, repo, commit).await
    }

    async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        ref_name: &str,
        update: &UpdateRef,
    ) -> Result<GitReference> {
        self.update_ref(owner, repo, ref_name, update).await
    }

    async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        create: &CreateRef,
    ) -> Result<GitReference> {
        self.create_ref(owner, repo, create).await
    }
}
