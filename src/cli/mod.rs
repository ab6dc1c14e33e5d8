//! CLI argument definitions.
use clap::Parser;

/// Command-line arguments. The tool defines no flags of its own; parsing
/// still provides `--help`/`--version` and rejects unknown arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Pick and run a configuration from .vscode/launch.json",
    long_about = None
)]
pub struct LaunchPickArgs {}
