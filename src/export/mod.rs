//! Export of generated NohBoard documents.
//!
//! Documents are written as JSON. File writes go through a temp file and a rename
//! so an existing keyboard file is never left half-written.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::models::NohboardConfig;

/// Serializes a document to JSON.
///
/// Pretty output uses two-space indentation; compact output is a single line.
pub fn to_json(config: &NohboardConfig, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(config)
    } else {
        serde_json::to_string(config)
    };
    json.context("Failed to serialize NohBoard document")
}

/// Writes a document to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns an error if serialization, directory creation, the write or the
/// final rename fails.
pub fn write_json(config: &NohboardConfig, path: &Path, pretty: bool) -> Result<()> {
    let content = to_json(config, pretty)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| {
            format!("Failed to create output directory: {}", parent.display())
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    info!(
        "Wrote {} elements to {}",
        config.elements.len(),
        path.display()
    );
    Ok(())
}
