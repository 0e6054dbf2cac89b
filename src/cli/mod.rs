//! CLI command handlers for nohboard-gen.
//!
//! Each subcommand receives the loaded application config and returns a
//! [`CliResult`](common::CliResult) whose error kind decides the exit code.

pub mod check;
pub mod common;
pub mod generate;
pub mod keycode;

// Re-export types used by main.rs and tests
pub use check::CheckArgs;
pub use common::{CliError, ExitCode};
pub use generate::GenerateArgs;
pub use keycode::KeycodeArgs;
