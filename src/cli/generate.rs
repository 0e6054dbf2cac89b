//! Generate command for NohBoard keyboard files.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::export;
use crate::services::Generator;
use clap::Args;
use std::path::PathBuf;

/// Generate a NohBoard keyboard file from a definition
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the keyboard definition file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (defaults to the configured output directory, else stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write single-line JSON instead of pretty-printing
    #[arg(long)]
    pub compact: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let generated = Generator::from_config(config)
            .load_and_generate(&self.input)
            .map_err(|e| CliError::from_pipeline(&e))?;

        let pretty = config.output.pretty && !self.compact;
        let output = self
            .output
            .clone()
            .or_else(|| config.output.output_path_for(&self.input));

        match output {
            Some(path) => {
                export::write_json(&generated.overlay, &path, pretty)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!(
                    "✓ Generated {} elements ({}x{} px)",
                    generated.overlay.elements.len(),
                    generated.overlay.width,
                    generated.overlay.height
                );
                println!("  Output: {}", path.display());
            }
            None => {
                let json = export::to_json(&generated.overlay, pretty)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
