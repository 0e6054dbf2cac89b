//! Parse-time elements of a keyboard definition file.
//!
//! These types are produced by the definition parser and hold values exactly as
//! written (after variable substitution). Typing and key-code resolution happen
//! later in [`crate::services::model`].

use std::collections::{BTreeSet, HashMap};

/// One resolved `name=value` pair. The value stays untyped until conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    /// Attribute name (e.g., "width", "marginLeft")
    pub name: String,
    /// Raw value text (e.g., "40px", "1.5k", "true")
    pub value: String,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named substitution source declared with `$name = ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variable {
    /// Variable holding text, usable wherever a value or display text is expected.
    Value {
        /// Variable name without the leading `$`
        name: String,
        /// Text the variable resolves to
        text: String,
    },
    /// Variable holding an attribute list, usable on key lines.
    Attributes {
        /// Variable name without the leading `$`
        name: String,
        /// Attributes appended to a key that references the variable
        attributes: Vec<Attribute>,
    },
}

impl Variable {
    /// Returns the variable name (without the initial `$`).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Value { name, .. } | Self::Attributes { name, .. } => name,
        }
    }
}

/// Variables declared so far, keyed by name.
pub type VariableTable = HashMap<String, Variable>;

/// One chord: key names that must all be pressed at the same time.
///
/// The set is ordered so equality and iteration do not depend on declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyNameSet {
    /// Key names making up the chord
    pub names: BTreeSet<String>,
}

impl KeyNameSet {
    /// Creates a chord from the given key names. Duplicate names collapse.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a chord consisting of a single key.
    pub fn single(name: impl Into<String>) -> Self {
        Self::new([name])
    }

    /// Adds a key name to the chord.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Returns the number of distinct keys in the chord.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the chord has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One key as written in the keys section, before typing and code resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyLine {
    /// Text displayed on the key
    pub display_text: String,
    /// OR-alternatives: each entry is an independent binding
    pub bindings: Vec<KeyNameSet>,
    /// Key-scope attributes in declaration order
    pub attributes: Vec<Attribute>,
    /// 1-based source line the key was declared on
    pub line: usize,
}

/// Keys between two blank lines, plus the row-scope attributes declared among them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyRow {
    /// Row-scope attributes in declaration order
    pub attributes: Vec<Attribute>,
    /// Keys in declaration order
    pub keys: Vec<KeyLine>,
}

impl KeyRow {
    /// Returns true if at least one key was added to the row.
    #[must_use]
    pub fn has_keys(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Returns the line of the first key, if any.
    #[must_use]
    pub fn first_line(&self) -> Option<usize> {
        self.keys.first().map(|key| key.line)
    }
}

/// Result of parsing one line of the keys section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyboardLine {
    /// A key definition appended to the current row
    Key(KeyLine),
    /// Row-scope attributes appended to the current row
    RowAttributes(Vec<Attribute>),
    /// Blank line: closes the current row
    RowEnd,
    /// Comment line: nothing to do
    Ignored,
}

/// Everything the parser extracted from one definition file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDefinition {
    /// Top-level attributes in declaration order (names are unique)
    pub attributes: Vec<Attribute>,
    /// All variables declared in the header
    pub variables: VariableTable,
    /// Non-empty rows in declaration order
    pub rows: Vec<KeyRow>,
}

impl ParsedDefinition {
    /// Returns the value of a top-level attribute, if declared.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Returns the total number of keys over all rows.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(|row| row.keys.len()).sum()
    }
}
