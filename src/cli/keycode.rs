//! Key code lookup command.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::keycode_db::{KeyCodeLookup, KeyboardLayout, KeyboardRegion};
use clap::Args;
use serde::Serialize;

/// Look up the virtual key code for a key name
#[derive(Debug, Clone, Args)]
pub struct KeycodeArgs {
    /// Key name as written in a definition (e.g. "Space", "ü")
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Keyboard region (de-ch, de, en-gb, en-us, fr, nl); defaults to the config
    #[arg(short, long, value_name = "REGION")]
    pub keyboard: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LookupResult {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i32>,
    valid: bool,
}

impl KeycodeArgs {
    /// Execute the keycode command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let region = match self.keyboard.as_deref().or(config.defaults.keyboard.as_deref()) {
            Some(code) => Some(
                KeyboardRegion::from_code(code).map_err(|e| CliError::validation(e.to_string()))?,
            ),
            None => None,
        };

        let layout = KeyboardLayout::create(region);
        let code = layout.resolve_key_code(&self.name).ok();

        let result = LookupResult {
            name: self.name.clone(),
            region: region.map(|region| region.code().to_string()),
            code,
            valid: code.is_some(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Key:    {}", result.name);
            println!("Region: {}", result.region.as_deref().unwrap_or("none"));
            match result.code {
                Some(code) => println!("Code:   {code} (0x{code:02X})"),
                None => println!("Status: ✗ Unknown key"),
            }
        }

        if !result.valid {
            return Err(CliError::validation(format!("Unknown key '{}'", self.name)));
        }

        Ok(())
    }
}
