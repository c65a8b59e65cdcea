//! `signet` command implementation.

use anyhow::{Context, Result, anyhow};
use signet_core::RepoCoordinates;
use signet_git::{Git, Repository};
use signet_github::GitHubClient;

use crate::inputs::Inputs;
use crate::output::{self, Outputs};
use crate::services::CommitService;

/// Run the commit command.
pub fn run(inputs: &Inputs) -> Result<()> {
    if let Some(dir) = &inputs.working_directory {
        std::env::set_current_dir(dir).map_err(|e| {
            anyhow!("Failed to change to working directory {}: {e}", dir.display())
        })?;
    }

    let git = Git::new(".").verbose(inputs.debug);
    let config = inputs.commit_config();

    let Some(pending) = CommitService::new(&git).prepare(&config)? else {
        output::notice("No changes found to commit - skipping");
        return Ok(());
    };
    output::debug(&format!("Branch: {}", pending.branch()));

    let repo = resolve_coordinates(
        inputs.owner.as_deref(),
        inputs.repository.as_deref(),
        inputs.github_repository.as_deref(),
        || {
            let repo = Repository::open_current()?;
            repo.origin_coordinates()
        },
    )?;
    output::debug(&format!("Repository: {repo}"));

    let client = GitHubClient::with_base_url(inputs.token.clone(), &inputs.api_url)
        .map_err(|e| anyhow!("Failed to create GitHub client: {e}"))?;
    let rt = tokio::runtime::Runtime::new()?;

    let outcome = rt.block_on(pending.publish(&client, &repo, &config))?;
    Outputs::new(inputs.github_output.clone())
        .write_outcome(&outcome)
        .map_err(|e| anyhow!("Failed to write outputs: {e}"))?;
    output::success(&format!(
        "{} {} at {}",
        capitalize(outcome.ref_operation.as_str()),
        outcome.branch,
        outcome.sha
    ));

    Ok(())
}

/// Resolve the target repository.
///
/// Explicit `owner` and `repository` values win. Missing halves come from
/// `github_repository` (`owner/repo`) or, when that is unset, from `origin`.
fn resolve_coordinates(
    owner: Option<&str>,
    repository: Option<&str>,
    github_repository: Option<&str>,
    origin: impl FnOnce() -> signet_git::Result<(String, String)>,
) -> Result<RepoCoordinates> {
    if let (Some(owner), Some(repository)) = (owner, repository) {
        return Ok(RepoCoordinates::new(owner, repository));
    }

    let (default_owner, default_repo) = match github_repository {
        Some(value) => value
            .split_once('/')
            .filter(|(o, r)| !o.is_empty() && !r.is_empty())
            .map(|(o, r)| (o.to_string(), r.to_string()))
            .with_context(|| format!("Invalid GITHUB_REPOSITORY: {value}"))?,
        None => origin().map_err(|e| {
            anyhow!("Failed to determine the repository from the origin remote: {e}")
        })?,
    };

    Ok(RepoCoordinates::new(
        owner.map_or(default_owner, str::to_string),
        repository.map_or(default_repo, str::to_string),
    ))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
