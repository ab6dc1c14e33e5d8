//! Library crate root re-exporting the launch pipeline modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod launcher;
pub mod prompt;
pub mod runtime;
