//! End-to-end pipeline from definition text to NohBoard document.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Error;
use crate::keycode_db::{KeyboardLayout, KeyboardRegion};
use crate::models::{KeyboardConfig, NohboardConfig};
use crate::parser::parse_definition;
use crate::services::geometry;
use crate::services::model::{resolve_region, KeyboardModelBuilder};

/// Everything produced by one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOverlay {
    /// Region whose key codes were used, if any
    pub region: Option<KeyboardRegion>,
    /// Typed keyboard the overlay was laid out from
    pub keyboard: KeyboardConfig,
    /// Output document
    pub overlay: NohboardConfig,
}

impl GeneratedOverlay {
    /// Number of rows in the keyboard.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.keyboard.rows.len()
    }

    /// Number of keys in the keyboard.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keyboard.key_count()
    }
}

/// Runs parse, model building and layout for definition documents.
///
/// Each call parses with a fresh context, so one generator can be reused for
/// any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    default_region: Option<String>,
}

impl Generator {
    /// Creates a generator without a default region.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator using the config's default region.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_region: config.defaults.keyboard.clone(),
        }
    }

    /// Sets the region used when a definition declares no `keyboard` attribute.
    #[must_use]
    pub fn with_default_region(mut self, code: impl Into<String>) -> Self {
        self.default_region = Some(code.into());
        self
    }

    /// Generates an overlay from the full text of a definition.
    ///
    /// # Errors
    ///
    /// Returns the first parse, model or layout error.
    pub fn generate_from_str(&self, text: &str) -> Result<GeneratedOverlay, Error> {
        self.generate_from_lines(text.lines())
    }

    /// Generates an overlay from definition lines (without line terminators).
    ///
    /// # Errors
    ///
    /// Returns the first parse, model or layout error.
    pub fn generate_from_lines<I, S>(&self, lines: I) -> Result<GeneratedOverlay, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parsed = parse_definition(lines)?;
        let region = resolve_region(&parsed, self.default_region.as_deref())?;
        debug!(
            "Using key codes for {}",
            region.map_or("no region", KeyboardRegion::code)
        );

        let layout = KeyboardLayout::create(region);
        let keyboard = KeyboardModelBuilder::new(&layout).build(&parsed)?;
        let overlay = geometry::generate(&keyboard)?;
        Ok(GeneratedOverlay {
            region,
            keyboard,
            overlay,
        })
    }

    /// Reads a definition file and generates its overlay.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the definition is invalid.
    /// Definition errors can be recovered with `downcast_ref::<Error>()`.
    pub fn load_and_generate(&self, path: &Path) -> Result<GeneratedOverlay> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read definition file {}", path.display()))?;
        let generated = self
            .generate_from_str(&text)
            .with_context(|| format!("Invalid definition in {}", path.display()))?;

        info!(
            "Generated {} elements from {} keys in {} ({}x{} px)",
            generated.overlay.elements.len(),
            generated.key_count(),
            path.display(),
            generated.overlay.width,
            generated.overlay.height
        );
        Ok(generated)
    }
}
