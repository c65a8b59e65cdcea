//! Terminal output and GitHub Actions workflow commands.
//!
//! Messages meant for the runner (`notice`, `error`, `debug`) are printed as
//! workflow commands on stdout. Step outputs go to the `GITHUB_OUTPUT` file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use signet_core::RunOutcome;

static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Set debug mode globally. Call once at startup.
pub fn set_debug(debug: bool) {
    DEBUG_MODE.store(debug, Ordering::Relaxed);
}

fn is_debug() -> bool {
    DEBUG_MODE.load(Ordering::Relaxed)
}

/// Escape a workflow command payload.
fn escape_data(msg: &str) -> String {
    msg.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn command(name: &str, msg: &str) -> String {
    format!("::{name}::{}", escape_data(msg))
}

/// Print a debug message (only in debug mode).
pub fn debug(msg: &str) {
    if is_debug() {
        println!("{}", command("debug", msg));
    }
}

/// Print a notice annotation.
pub fn notice(msg: &str) {
    println!("{}", command("notice", msg));
}

/// Print an error annotation. The step is failed by the exit code.
pub fn error(msg: &str) {
    println!("{}", command("error", msg));
}

/// Print a success line.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Destination for step outputs.
#[derive(Debug, Clone)]
pub enum Outputs {
    /// Append to the file named by `GITHUB_OUTPUT`.
    File(PathBuf),
    /// Print to stdout, in the same delimiter form.
    Stdout,
}

impl Outputs {
    pub fn new(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    /// Write the outputs of a successful run.
    ///
    /// # Errors
    /// Returns an error if the output file cannot be written.
    pub fn write_outcome(&self, outcome: &RunOutcome) -> io::Result<()> {
        self.write(&[
            ("message", outcome.message.as_str()),
            ("ref", outcome.branch.as_str()),
            ("ref-operation", outcome.ref_operation.as_str()),
            ("sha", outcome.sha.as_str()),
        ])
    }

    fn write(&self, values: &[(&str, &str)]) -> io::Result<()> {
        let contents = render(values)?;
        match self {
            Self::File(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(contents.as_bytes())
            }
            Self::Stdout => io::stdout().lock().write_all(contents.as_bytes()),
        }
    }
}

fn render(values: &[(&str, &str)]) -> io::Result<String> {
    let mut contents = String::new();
    for (name, value) in values {
        contents.push_str(&key_value_message(name, value)?);
        contents.push('\n');
    }
    Ok(contents)
}

/// Format one output in the delimiter form the runner parses, which allows
/// values spanning several lines.
fn key_value_message(name: &str, value: &str) -> io::Result<String> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());

    if name.contains(&delimiter) || value.contains(&delimiter) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Unexpected input: output {name} contains the delimiter {delimiter}"),
        ));
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}"))
}
