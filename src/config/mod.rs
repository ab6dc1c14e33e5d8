//! Locate and parse the project's launch configurations.

pub mod document;
pub mod loader;

pub use document::{LaunchDocument, LaunchEntry, UNNAMED_PLACEHOLDER};
pub use loader::{default_launch_file_path, load_from_path, LAUNCH_FILE_RELATIVE};
