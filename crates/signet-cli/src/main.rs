//! Signet CLI - commit staged changes through the GitHub API.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod inputs;
mod output;
mod services;

use commands::Cli;
use inputs::Inputs;

fn main() {
    let cli = Cli::parse();

    let result = Inputs::from_cli(cli)
        .map_err(anyhow::Error::from)
        .and_then(|inputs| {
            init_logging(inputs.debug);
            output::set_debug(inputs.debug);
            commands::commit::run(&inputs)
        });

    if let Err(e) = result {
        tracing::debug!(error = ?e, "run failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Install the log subscriber. `SIGNET_LOG` overrides the default level.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SIGNET_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
