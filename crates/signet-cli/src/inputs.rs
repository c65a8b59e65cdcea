//! Validation of action inputs.

use std::path::PathBuf;

use signet_github::SecretString;
use thiserror::Error;

use crate::commands::Cli;
use crate::services::CommitConfig;

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A required input is missing or empty.
    #[error("Input required and not supplied: {0}")]
    Missing(&'static str),

    /// A boolean input is not a YAML core schema boolean.
    #[error(
        "Input does not meet YAML 1.2 \"Core Schema\" specification: {0}\n\
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBool(&'static str),
}

/// Validated inputs of one run.
#[derive(Debug)]
pub struct Inputs {
    pub message: String,
    pub token: SecretString,
    pub ref_name: Option<String>,
    pub fail_on_no_changes: bool,
    pub force: bool,
    pub owner: Option<String>,
    pub repository: Option<String>,
    pub working_directory: Option<PathBuf>,
    pub github_repository: Option<String>,
    pub github_output: Option<PathBuf>,
    pub api_url: String,
    pub debug: bool,
}

impl Inputs {
    /// Validate parsed arguments.
    ///
    /// # Errors
    /// Returns the first missing required input, then the first invalid
    /// boolean.
    pub fn from_cli(cli: Cli) -> Result<Self, InputError> {
        let message = supplied(cli.message).ok_or(InputError::Missing("message"))?;
        let token = supplied(cli.token).ok_or(InputError::Missing("token"))?;
        let fail_on_no_changes =
            boolean(cli.fail_on_no_changes, "fail-on-no-changes", true)?;
        let force = boolean(cli.force, "force", false)?;

        Ok(Self {
            message,
            token: SecretString::from(token),
            ref_name: supplied(cli.ref_name),
            fail_on_no_changes,
            force,
            owner: supplied(cli.owner),
            repository: supplied(cli.repository),
            working_directory: supplied(cli.working_directory).map(PathBuf::from),
            github_repository: supplied(cli.github_repository),
            github_output: supplied(cli.github_output).map(PathBuf::from),
            api_url: supplied(cli.api_url)
                .unwrap_or_else(|| signet_github::GitHubClient::DEFAULT_API_URL.to_string()),
            debug: cli.debug || cli.runner_debug.as_deref() == Some("1"),
        })
    }

    /// Settings passed to the commit service.
    pub fn commit_config(&self) -> CommitConfig {
        CommitConfig {
            message: self.message.clone(),
            ref_name: self.ref_name.clone(),
            force: self.force,
            fail_on_no_changes: self.fail_on_no_changes,
        }
    }
}

/// Trim surrounding whitespace and treat empty values as not supplied.
fn supplied(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a boolean input the way Actions does: only the YAML 1.2 core schema
/// spellings are accepted.
fn boolean(value: Option<String>, name: &'static str, default: bool) -> Result<bool, InputError> {
    let Some(value) = supplied(value) else {
        return Ok(default);
    };

    match value.as_str() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        _ => Err(InputError::InvalidBool(name)),
    }
}
