//! Entry point for launchpick.
use std::process::ExitCode;

use clap::Parser;
use launchpick::{cli::LaunchPickArgs, lib::telemetry, runtime};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), runtime::RuntimeExit> {
    telemetry::init_tracing().map_err(runtime::RuntimeExit::from_error)?;
    let _args = LaunchPickArgs::parse();
    runtime::run_pipeline().await
}
