//! Typed keyboard model produced from a parsed definition.

use crate::constants::{DEFAULT_KEY_HEIGHT, DEFAULT_KEY_SPACING, DEFAULT_KEY_WIDTH};
use crate::models::unit::ValueWithUnit;

/// One resolved chord: key codes that are pressed together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Virtual key codes, ascending and without duplicates
    pub codes: Vec<i32>,
}

impl KeyBinding {
    /// Creates a binding from the given codes, sorting and deduplicating them.
    pub fn new(codes: impl IntoIterator<Item = i32>) -> Self {
        let mut codes: Vec<i32> = codes.into_iter().collect();
        codes.sort_unstable();
        codes.dedup();
        Self { codes }
    }
}

/// A fully typed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDefinition {
    /// Text displayed on the key
    pub text: String,
    /// OR-alternatives; never empty
    pub bindings: Vec<KeyBinding>,
    /// Width override (keyboard width when absent)
    pub custom_width: Option<ValueWithUnit>,
    /// Height override (keyboard height when absent)
    pub custom_height: Option<ValueWithUnit>,
    /// Extra gap above the key
    pub margin_top: Option<ValueWithUnit>,
    /// Extra gap left of the key
    pub margin_left: Option<ValueWithUnit>,
    /// Placed below the previous key instead of beside it
    pub stacked: bool,
    /// Declared `id` attribute, if any
    pub id: Option<i32>,
    /// 1-based source line, for error reporting
    pub line: usize,
}

impl KeyDefinition {
    /// Creates a key with the given text and bindings and no layout overrides.
    pub fn new(text: impl Into<String>, bindings: Vec<KeyBinding>) -> Self {
        Self {
            text: text.into(),
            bindings,
            custom_width: None,
            custom_height: None,
            margin_top: None,
            margin_left: None,
            stacked: false,
            id: None,
            line: 0,
        }
    }

    /// Sets the source line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// Sets the custom width.
    #[must_use]
    pub fn with_width(mut self, width: ValueWithUnit) -> Self {
        self.custom_width = Some(width);
        self
    }

    /// Sets the custom height.
    #[must_use]
    pub fn with_height(mut self, height: ValueWithUnit) -> Self {
        self.custom_height = Some(height);
        self
    }

    /// Marks the key as stacked.
    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }
}

/// A typed row of keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardRow {
    /// Keys in left-to-right order
    pub keys: Vec<KeyDefinition>,
    /// Extra gap above the row
    pub margin_top: Option<ValueWithUnit>,
    /// Extra gap before the first key
    pub margin_left: Option<ValueWithUnit>,
}

impl KeyboardRow {
    /// Creates a row without margins.
    #[must_use]
    pub fn new(keys: Vec<KeyDefinition>) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }
}

/// The whole typed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// Base key width in pixels
    pub width: i32,
    /// Base key height in pixels
    pub height: i32,
    /// Gap between adjacent keys in pixels
    pub spacing: i32,
    /// Rows in top-to-bottom order
    pub rows: Vec<KeyboardRow>,
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_KEY_WIDTH,
            height: DEFAULT_KEY_HEIGHT,
            spacing: DEFAULT_KEY_SPACING,
            rows: Vec::new(),
        }
    }
}

impl KeyboardConfig {
    /// Returns the number of keys over all rows.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(|row| row.keys.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_binding_sorts_and_dedups() {
        let binding = KeyBinding::new([65, 18, 65]);
        assert_eq!(binding.codes, vec![18, 65]);
    }

    #[test]
    fn test_keyboard_config_defaults() {
        let config = KeyboardConfig::default();
        assert_eq!((config.width, config.height, config.spacing), (40, 40, 1));
        assert_eq!(config.key_count(), 0);
    }

    #[test]
    fn test_key_definition_builders() {
        let key = KeyDefinition::new("A", vec![KeyBinding::new([65])])
            .with_line(7)
            .stacked();
        assert!(key.stacked);
        assert_eq!(key.line, 7);
        assert!(key.custom_width.is_none());
    }
}
