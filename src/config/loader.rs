use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::lib::{errors::LaunchFileError, jsonc};

use super::LaunchDocument;

/// Launch file location relative to the working directory. Not configurable.
pub const LAUNCH_FILE_RELATIVE: &str = ".vscode/launch.json";

/// Resolve `<cwd>/.vscode/launch.json`.
pub fn default_launch_file_path() -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(cwd.join(LAUNCH_FILE_RELATIVE))
}

/// Load and parse the launch file at `path`.
///
/// Guarantees the returned document holds at least one configuration.
pub fn load_from_path(path: &Path) -> Result<LaunchDocument, LaunchFileError> {
    info!(
        target: "launchpick::config",
        path = %path.display(),
        "Loading launch configurations"
    );

    if !path.exists() {
        let err = LaunchFileError::NotFound {
            path: path.to_path_buf(),
        };
        error!(
            target: "launchpick::config",
            path = %path.display(),
            "Launch file does not exist"
        );
        return Err(err);
    }

    let raw = fs::read_to_string(path).map_err(|source| LaunchFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let cleaned = jsonc::strip_line_comments(&raw);
    let document: LaunchDocument = serde_json::from_str(&cleaned).map_err(|source| {
        let err = LaunchFileError::Parse {
            path: path.to_path_buf(),
            source,
        };
        error!(
            target: "launchpick::config",
            path = %path.display(),
            reason = %err,
            "Failed to parse launch file"
        );
        err
    })?;

    if document.configurations.is_empty() {
        return Err(LaunchFileError::EmptyConfigurations {
            path: path.to_path_buf(),
        });
    }

    info!(
        target: "launchpick::config",
        path = %path.display(),
        configurations = document.configurations.len(),
        "Loaded launch configurations"
    );
    Ok(document)
}
