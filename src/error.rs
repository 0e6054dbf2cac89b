//! Error types for model building and layout.
//!
//! Parse errors live in [`crate::parser::error`]; [`Error`] wraps all three so
//! the whole pipeline can return a single type.

use thiserror::Error;

use crate::parser::ParseError;

/// Errors raised while typing attributes and resolving key codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Top-level attribute name is not known.
    #[error("Unknown keyboard attribute: {0}")]
    UnknownKeyboardAttribute(String),

    /// Row attribute name is not known.
    #[error("Unknown row attribute: {0}")]
    UnknownRowAttribute(String),

    /// Key attribute name is not known.
    #[error("Unknown key attribute: {0}")]
    UnknownKeyAttribute(String),

    /// The number part of a value could not be parsed.
    #[error("Invalid value '{value}' for attribute '{name}'")]
    InvalidValue {
        /// Attribute name
        name: String,
        /// Raw value text
        value: String,
    },

    /// Value is not `true` or `false`.
    #[error("Invalid value '{value}' for attribute '{name}': expected a boolean")]
    InvalidBoolean {
        /// Attribute name
        name: String,
        /// Raw value text
        value: String,
    },

    /// Value is not an integer.
    #[error("Invalid value '{value}' for attribute '{name}': expected an integer")]
    InvalidInteger {
        /// Attribute name
        name: String,
        /// Raw value text
        value: String,
    },

    /// Unit suffix is not a known symbol.
    #[error("Unknown unit '{symbol}'. Supported units: keys (k), pixels (px)")]
    UnknownUnit {
        /// Suffix as written
        symbol: String,
    },

    /// A keyboard-level size was given in a unit other than pixels.
    #[error("Invalid value for keyboard attribute '{name}'. Expected units in pixel, but got: {symbol}")]
    NonPixelUnit {
        /// Attribute name
        name: String,
        /// Unit symbol that was used
        symbol: String,
    },

    /// Key name has no code in the active layout.
    #[error("Unknown key '{0}'")]
    UnknownKey(String),

    /// Region code is not one of the supported layouts.
    #[error("Keyboard region '{code}' is not supported. Available regions: {available}")]
    UnsupportedRegion {
        /// Code as written
        code: String,
        /// Comma-separated list of supported codes
        available: String,
    },

    /// A key-scope failure, with the key it happened on.
    #[error("{source} (key '{text}' on line {line})")]
    InKey {
        /// Display text of the key
        text: String,
        /// Line the key was declared on
        line: usize,
        /// Underlying error
        source: Box<ModelError>,
    },

    /// A row-scope failure, with the row it happened on.
    #[error("{source} (row starting on line {line})")]
    InRow {
        /// Line of the row's first key
        line: usize,
        /// Underlying error
        source: Box<ModelError>,
    },
}

impl ModelError {
    /// Attaches the failing key to this error.
    #[must_use]
    pub fn in_key(self, text: &str, line: usize) -> Self {
        Self::InKey {
            text: text.to_string(),
            line,
            source: Box::new(self),
        }
    }

    /// Attaches the failing row to this error.
    #[must_use]
    pub fn in_row(self, line: usize) -> Self {
        Self::InRow {
            line,
            source: Box::new(self),
        }
    }
}

/// Errors raised while laying out keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A stacked key was the first key of its row.
    #[error("Stacked key '{text}' on line {line} has no previous key in its row")]
    StackedWithoutPredecessor {
        /// Display text of the key
        text: String,
        /// Line the key was declared on
        line: usize,
    },

    /// Text anchor computation received the wrong number of corners.
    #[error("Expected four boundaries, but got {0}")]
    BoundaryCount(usize),
}

/// Any error produced while turning a definition into a NohBoard layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The definition text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An attribute or key name could not be typed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The typed keyboard cannot be laid out.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_context_is_appended() {
        let err = ModelError::UnknownKeyAttribute("opacity".to_string()).in_key("Jump", 12);
        assert_eq!(
            err.to_string(),
            "Unknown key attribute: opacity (key 'Jump' on line 12)"
        );
    }

    #[test]
    fn test_row_context_is_appended() {
        let err = ModelError::UnknownRowAttribute("opacity".to_string()).in_row(3);
        assert_eq!(
            err.to_string(),
            "Unknown row attribute: opacity (row starting on line 3)"
        );
    }

    #[test]
    fn test_error_is_transparent() {
        let err: Error = LayoutError::BoundaryCount(3).into();
        assert_eq!(err.to_string(), "Expected four boundaries, but got 3");
    }
}
