//! Shared library modules providing error types, comment stripping, and telemetry initialization.

pub mod errors;
pub mod jsonc;
pub mod telemetry;
