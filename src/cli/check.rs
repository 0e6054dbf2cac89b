//! Check command for definition files.

use crate::cli::common::{CliError, CliResult, ErrorKind};
use crate::config::Config;
use crate::services::{GeneratedOverlay, Generator};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check a definition file without writing any output
#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// Path to the keyboard definition file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Summary printed by `check`.
#[derive(Debug, Serialize)]
struct CheckReport {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<CheckSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct CheckSummary {
    rows: usize,
    keys: usize,
    elements: usize,
    width: i32,
    height: i32,
}

impl From<&GeneratedOverlay> for CheckSummary {
    fn from(generated: &GeneratedOverlay) -> Self {
        Self {
            rows: generated.row_count(),
            keys: generated.key_count(),
            elements: generated.overlay.elements.len(),
            width: generated.overlay.width,
            height: generated.overlay.height,
        }
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let report = match Generator::from_config(config).load_and_generate(&self.input) {
            Ok(generated) => CheckReport {
                valid: true,
                region: generated.region.map(|region| region.code().to_string()),
                summary: Some(CheckSummary::from(&generated)),
                error: None,
            },
            Err(e) => {
                let err = CliError::from_pipeline(&e);
                if err.kind == ErrorKind::Io {
                    return Err(err);
                }
                CheckReport {
                    valid: false,
                    region: None,
                    summary: None,
                    error: Some(err.message),
                }
            }
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print_human_readable(&report);
        }

        if !report.valid {
            return Err(CliError::validation("Definition check failed"));
        }
        Ok(())
    }
}

fn print_human_readable(report: &CheckReport) {
    if let Some(summary) = &report.summary {
        println!("✓ Definition is valid");
        println!();
        println!("  Region:   {}", report.region.as_deref().unwrap_or("none"));
        println!("  Rows:     {}", summary.rows);
        println!("  Keys:     {}", summary.keys);
        println!("  Elements: {}", summary.elements);
        println!("  Size:     {}x{} px", summary.width, summary.height);
    } else {
        println!("✗ Definition is invalid");
        if let Some(error) = &report.error {
            println!();
            println!("  {error}");
        }
    }
}
