//! Spawn the selected configuration and observe its terminal event.

pub mod command;
pub mod env;

pub use command::{build_shell_command, shell_line};
pub use env::merge_environment;

use tracing::info;

use crate::{config::LaunchEntry, lib::errors::LaunchError};

/// Terminal outcome of one spawn attempt. Exactly one of these is produced;
/// the launcher never retries or restarts the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The process ran and exited with a code, possibly non-zero.
    Exited(i32),
    /// The process could not start, or was killed before producing a code.
    Failed(String),
}

/// Spawn the entry's executable through the system shell and wait for it.
///
/// A missing `runtimeExecutable` is a precondition failure; everything that
/// goes wrong after that point is reported as [`LaunchOutcome::Failed`]
/// rather than an error of this tool.
pub async fn launch(entry: &LaunchEntry) -> Result<LaunchOutcome, LaunchError> {
    let executable =
        entry
            .runtime_executable
            .as_deref()
            .ok_or_else(|| LaunchError::MissingExecutable {
                name: entry.display_name().to_string(),
            })?;

    info!(
        target: "launchpick::launcher",
        executable,
        args = ?entry.runtime_args,
        env_overrides = entry.env.len(),
        "Spawning configuration"
    );

    let mut child = match build_shell_command(executable, &entry.runtime_args, &entry.env).spawn() {
        Ok(child) => child,
        Err(err) => return Ok(LaunchOutcome::Failed(err.to_string())),
    };

    match child.wait().await {
        Ok(status) => match status.code() {
            Some(code) => Ok(LaunchOutcome::Exited(code)),
            None => Ok(LaunchOutcome::Failed(
                "process was terminated by a signal before exiting".into(),
            )),
        },
        Err(err) => Ok(LaunchOutcome::Failed(err.to_string())),
    }
}
