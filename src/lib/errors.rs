use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while locating or parsing the launch file.
#[derive(Debug, Error)]
pub enum LaunchFileError {
    /// `.vscode/launch.json` does not exist under the working directory.
    #[error("launch file not found at {path}")]
    NotFound { path: PathBuf },
    /// The file exists but could not be read.
    #[error("failed to read launch file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The comment-stripped text is not valid JSON.
    #[error("failed to parse launch file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but holds zero configurations.
    #[error("no configurations found in {path}")]
    EmptyConfigurations { path: PathBuf },
}

/// Errors raised while prompting for a configuration choice.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Standard input reached end-of-file before a valid choice was given.
    #[error("input stream closed before a configuration was selected")]
    InputClosed,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised when preparing the selected configuration for launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The selected entry has no `runtimeExecutable` to run.
    #[error("missing `runtimeExecutable` in selected configuration `{name}`")]
    MissingExecutable { name: String },
}
