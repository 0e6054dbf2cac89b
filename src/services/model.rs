//! Builds the typed keyboard model from a parsed definition.

use tracing::debug;

use crate::error::ModelError;
use crate::keycode_db::{KeyCodeLookup, KeyboardRegion};
use crate::models::{
    KeyBinding, KeyDefinition, KeyLine, KeyNameSet, KeyRow, KeyboardConfig, KeyboardRow,
    ParsedDefinition,
};
use crate::services::attributes::{apply_key_attribute, apply_keyboard_attribute, apply_row_attribute};

/// Name of the top-level attribute selecting the key-code region.
pub const REGION_ATTRIBUTE: &str = "keyboard";

/// Picks the key-code region for a definition.
///
/// The definition's `keyboard` attribute wins over `fallback` (usually from the
/// application config). `None` means only the shared key codes are available.
///
/// # Errors
///
/// Returns [`ModelError::UnsupportedRegion`] for an unknown code.
pub fn resolve_region(
    parsed: &ParsedDefinition,
    fallback: Option<&str>,
) -> Result<Option<KeyboardRegion>, ModelError> {
    parsed
        .attribute(REGION_ATTRIBUTE)
        .or(fallback)
        .map(KeyboardRegion::from_code)
        .transpose()
}

/// Converts parse-time rows and keys into [`KeyboardConfig`].
pub struct KeyboardModelBuilder<'a, L: KeyCodeLookup + ?Sized> {
    lookup: &'a L,
}

impl<'a, L: KeyCodeLookup + ?Sized> KeyboardModelBuilder<'a, L> {
    /// Creates a builder resolving key names through `lookup`.
    pub const fn new(lookup: &'a L) -> Self {
        Self { lookup }
    }

    /// Builds the whole keyboard.
    ///
    /// # Errors
    ///
    /// Returns the first attribute or key-name error; row and key errors carry
    /// the line they come from.
    pub fn build(&self, parsed: &ParsedDefinition) -> Result<KeyboardConfig, ModelError> {
        let mut config = KeyboardConfig::default();
        for attribute in &parsed.attributes {
            apply_keyboard_attribute(&mut config, attribute)?;
        }
        debug!(
            "Keyboard base size {}x{}, spacing {}",
            config.width, config.height, config.spacing
        );

        config.rows = parsed
            .rows
            .iter()
            .map(|row| self.build_row(row))
            .collect::<Result<_, _>>()?;
        Ok(config)
    }

    /// Builds one row.
    pub fn build_row(&self, row: &KeyRow) -> Result<KeyboardRow, ModelError> {
        let mut model = KeyboardRow::default();
        for attribute in &row.attributes {
            apply_row_attribute(&mut model, attribute)
                .map_err(|err| err.in_row(row.first_line().unwrap_or_default()))?;
        }
        model.keys = row
            .keys
            .iter()
            .map(|key| self.build_key(key))
            .collect::<Result<_, _>>()?;
        Ok(model)
    }

    /// Builds one key.
    pub fn build_key(&self, key: &KeyLine) -> Result<KeyDefinition, ModelError> {
        let in_key = |err: ModelError| err.in_key(&key.display_text, key.line);

        let bindings = key
            .bindings
            .iter()
            .map(|names| self.resolve_binding(names))
            .collect::<Result<Vec<_>, _>>()
            .map_err(in_key)?;

        let mut model = KeyDefinition::new(key.display_text.clone(), bindings).with_line(key.line);
        for attribute in &key.attributes {
            apply_key_attribute(&mut model, attribute).map_err(in_key)?;
        }
        Ok(model)
    }

    fn resolve_binding(&self, names: &KeyNameSet) -> Result<KeyBinding, ModelError> {
        let codes = names
            .names
            .iter()
            .map(|name| self.lookup.resolve_key_code(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(KeyBinding::new(codes))
    }
}
