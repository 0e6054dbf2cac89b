//! NohBoard Generator - keyboard definition to NohBoard layout compiler
//!
//! Reads a text definition of a keyboard and writes the NohBoard keyboard
//! file that displays it.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nohboard_gen::cli::{CheckArgs, ExitCode, GenerateArgs, KeycodeArgs};
use nohboard_gen::config::Config;
use nohboard_gen::constants::APP_BINARY_NAME;

/// NohBoard Generator - build NohBoard keyboard files from text definitions
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the user config
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a NohBoard keyboard file
    Generate(GenerateArgs),
    /// Check a definition and print a summary
    Check(CheckArgs),
    /// Look up the key code of a key name
    Keycode(KeycodeArgs),
}

/// Loads the config, falling back to defaults if it cannot be used.
fn load_config(path: Option<&PathBuf>) -> Config {
    let result = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    result.unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e:#}");
        Config::default()
    })
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries generated JSON
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = load_config(cli.config.as_ref());

    let result = match &cli.command {
        Command::Generate(args) => args.execute(&config),
        Command::Check(args) => args.execute(&config),
        Command::Keycode(args) => args.execute(&config),
    };

    match result {
        Ok(()) => ExitCode::Success.into(),
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code().into()
        }
    }
}
