//! Top-level pipeline: load configurations, prompt, launch, report.

use std::process::ExitCode;

use anyhow::Error;
use tokio::io::BufReader;
use uuid::Uuid;

use crate::{
    config::{self, LaunchDocument, LaunchEntry},
    launcher::{self, LaunchOutcome},
    lib::telemetry::LaunchSpan,
    prompt,
};

/// Question text issued before each selection attempt.
const SELECTION_QUESTION: &str = "Select a configuration";

/// Context line prefixed to every unrecoverable pipeline failure.
const PIPELINE_ERROR_CONTEXT: &str = "Error reading or parsing launch.json";

/// Bundles a runtime error message with the process exit code.
#[derive(Debug)]
pub struct RuntimeExit {
    message: String,
    exit_code: ExitCode,
}

impl RuntimeExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Run the whole pipeline once: load → prompt → launch → report outcome.
///
/// Child-process failure is reported but deliberately does not become an
/// `Err`; only loading, prompting, and precondition failures do.
pub async fn run_pipeline() -> Result<(), RuntimeExit> {
    let launch_file = config::default_launch_file_path().map_err(RuntimeExit::from_error)?;
    let document = config::load_from_path(&launch_file)
        .map_err(|err| RuntimeExit::from_error(Error::new(err).context(PIPELINE_ERROR_CONTEXT)))?;

    let entry = select_entry(&document).await?;
    launch_selected(entry).await
}

/// Prompt on the real terminal. The stdin reader is scoped to this function
/// and released on every path out of it.
async fn select_entry(document: &LaunchDocument) -> Result<&LaunchEntry, RuntimeExit> {
    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();
    let index = prompt::prompt_for_selection(
        SELECTION_QUESTION,
        &document.configurations,
        input,
        &mut output,
    )
    .await
    .map_err(RuntimeExit::from_error)?;
    Ok(&document.configurations[index])
}

async fn launch_selected(entry: &LaunchEntry) -> Result<(), RuntimeExit> {
    let span = LaunchSpan::start(Uuid::new_v4(), entry.display_name());
    match launcher::launch(entry).await {
        Ok(LaunchOutcome::Exited(code)) => {
            println!("Child process exited with code {code}");
            span.finish("exited", Some(code));
            Ok(())
        }
        Ok(LaunchOutcome::Failed(message)) => {
            eprintln!("Failed to start process: {message}");
            span.finish("failed", None);
            Ok(())
        }
        Err(err) => {
            span.finish("rejected", None);
            Err(RuntimeExit::from_error(
                Error::new(err).context(PIPELINE_ERROR_CONTEXT),
            ))
        }
    }
}
