//! Command-line definition and command implementations.

pub mod commit;

use clap::Parser;

/// Signet - commit staged changes to GitHub as a single verified commit.
///
/// Every flag can also be supplied as a GitHub Actions input through its
/// `INPUT_*` environment variable. Values stay unvalidated strings here so
/// that empty inputs and boolean spellings are checked the way the runner
/// expects.
#[derive(Debug, Parser)]
#[command(name = "signet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Commit message
    #[arg(long, short, env = "INPUT_MESSAGE")]
    pub message: Option<String>,

    /// Token used to call the GitHub API
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Branch to commit to (defaults to the current branch)
    #[arg(long = "ref", env = "INPUT_REF", value_name = "BRANCH")]
    pub ref_name: Option<String>,

    /// Fail when there are no staged changes
    #[arg(long, env = "INPUT_FAIL-ON-NO-CHANGES", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub fail_on_no_changes: Option<String>,

    /// Allow a non-fast-forward update of the branch
    #[arg(long, env = "INPUT_FORCE", value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub force: Option<String>,

    /// Repository owner (defaults to the current repository)
    #[arg(long, env = "INPUT_OWNER")]
    pub owner: Option<String>,

    /// Repository name (defaults to the current repository)
    #[arg(long, env = "INPUT_REPOSITORY")]
    pub repository: Option<String>,

    /// Directory to run in
    #[arg(long, env = "INPUT_WORKING-DIRECTORY", value_name = "DIR")]
    pub working_directory: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Echo git commands and enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[arg(long, env = "RUNNER_DEBUG", hide = true)]
    pub runner_debug: Option<String>,

    #[arg(long, env = "GITHUB_REPOSITORY", hide = true)]
    pub github_repository: Option<String>,

    #[arg(long, env = "GITHUB_OUTPUT", hide = true)]
    pub github_output: Option<String>,
}
