//! Errors raised while parsing a keyboard definition.

use std::fmt;
use thiserror::Error;

/// Suggestion appended to a positional syntax error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hint {
    /// No suggestion
    #[default]
    None,
    /// An unquoted attribute value contained an unsupported character
    QuoteValue,
    /// An unquoted key name contained an unsupported character
    QuoteName,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::QuoteValue => f.write_str(". Use double quotes around complex values"),
            Self::QuoteName => f.write_str(". Wrap complex names in double quotes"),
        }
    }
}

/// Errors that abort parsing of a definition file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character was required but the line had ended.
    #[error("Unexpected end of line on line {line}")]
    UnexpectedEndOfLine {
        /// 1-based line number
        line: usize,
    },

    /// A double-quoted text was still open at the end of the line.
    #[error("Unexpected end of line; \" not closed on line {line}")]
    UnclosedQuote {
        /// 1-based line number
        line: usize,
    },

    /// A header line was neither a comment, an attribute, a variable nor `Keys:`.
    #[error("Invalid syntax on line {line}")]
    InvalidSyntax {
        /// 1-based line number
        line: usize,
    },

    /// Malformed input at a known position.
    #[error("{message} on line {line}, column {column}{hint}")]
    Syntax {
        /// What was wrong
        message: String,
        /// 1-based line number
        line: usize,
        /// 0-based character index of the cursor when the error was detected
        column: usize,
        /// Optional suggestion
        hint: Hint,
    },

    /// A top-level attribute name was declared twice.
    #[error("Attribute '{name}' is declared multiple times on line {line}")]
    DuplicateAttribute {
        /// Attribute name
        name: String,
        /// Line of the second declaration
        line: usize,
    },

    /// A variable name was declared twice.
    #[error("The variable ${name} was already defined on line {line}")]
    DuplicateVariable {
        /// Variable name without `$`
        name: String,
        /// Line of the second declaration
        line: usize,
    },

    /// A variable was referenced before (or without) being declared.
    #[error("Unknown variable: ${name} on line {line}, column {column}")]
    UnknownVariable {
        /// Variable name without `$`
        name: String,
        /// 1-based line number
        line: usize,
        /// Cursor position after the variable name
        column: usize,
    },

    /// An attribute variable was used where text is expected.
    #[error(
        "Invalid variable usage of ${name}: variable contains attribute(s), not a value! on line {line}, column {column}"
    )]
    NotAValueVariable {
        /// Variable name without `$`
        name: String,
        /// 1-based line number
        line: usize,
        /// Cursor position after the variable name
        column: usize,
    },

    /// A value variable was used where an attribute list is expected.
    #[error("Variable ${name} is not an attribute variable on line {line}, column {column}")]
    NotAnAttributeVariable {
        /// Variable name without `$`
        name: String,
        /// 1-based line number
        line: usize,
        /// Cursor position after the variable name
        column: usize,
    },

    /// A key line declared a display text but nothing to bind it to.
    #[error("No key binding defined for key '{text}' on line {line}")]
    MissingBinding {
        /// Display text of the key
        text: String,
        /// 1-based line number
        line: usize,
    },
}

impl ParseError {
    /// Returns the line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedEndOfLine { line }
            | Self::UnclosedQuote { line }
            | Self::InvalidSyntax { line }
            | Self::Syntax { line, .. }
            | Self::DuplicateAttribute { line, .. }
            | Self::DuplicateVariable { line, .. }
            | Self::UnknownVariable { line, .. }
            | Self::NotAValueVariable { line, .. }
            | Self::NotAnAttributeVariable { line, .. }
            | Self::MissingBinding { line, .. } => *line,
        }
    }
}
