//! Key name to Windows virtual key code lookup.
//!
//! NohBoard identifies keys by their virtual key code. Most codes are the same on
//! every Latin layout; the OEM keys differ per region, so a [`KeyboardLayout`] is
//! built for one [`KeyboardRegion`] (or none, which leaves only the shared keys).

mod tables;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

pub use tables::{KeyCodeEntry, BASIC_KEY_CODES};

/// Keyboard layout regions with region-specific key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardRegion {
    /// Swiss German (KBDSG)
    SwissGerman,
    /// German (KBDGR)
    German,
    /// English, United Kingdom (KBDUK)
    Uk,
    /// English, United States (KBDUS)
    Us,
    /// French (KBDFRNA)
    French,
    /// Dutch (KBDNE)
    Dutch,
}

impl KeyboardRegion {
    /// All regions, in the order they are listed to users.
    pub const ALL: [Self; 6] = [
        Self::SwissGerman,
        Self::German,
        Self::Uk,
        Self::Us,
        Self::French,
        Self::Dutch,
    ];

    /// Region code used in definitions and config (e.g. `de-ch`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::SwissGerman => "de-ch",
            Self::German => "de",
            Self::Uk => "en-gb",
            Self::Us => "en-us",
            Self::French => "fr",
            Self::Dutch => "nl",
        }
    }

    /// Looks up a region by code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnsupportedRegion`] listing all known codes.
    pub fn from_code(code: &str) -> Result<Self, ModelError> {
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ModelError::UnsupportedRegion {
                code: code.to_string(),
                available: Self::ALL
                    .iter()
                    .map(|region| region.code())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl FromStr for KeyboardRegion {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl fmt::Display for KeyboardRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolves key names to key codes.
pub trait KeyCodeLookup {
    /// Returns the code for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownKey`] if the name is not mapped.
    fn resolve_key_code(&self, name: &str) -> Result<i32, ModelError>;
}

/// Case-insensitive name to code table for one region.
#[derive(Debug, Clone, Default)]
pub struct KeyboardLayout {
    region: Option<KeyboardRegion>,
    codes: HashMap<String, i32>,
}

impl KeyboardLayout {
    /// Builds the table for `region`; without a region only the shared keys are mapped.
    #[must_use]
    pub fn create(region: Option<KeyboardRegion>) -> Self {
        let mut layout = Self {
            region,
            codes: HashMap::new(),
        };
        layout.register_all(BASIC_KEY_CODES);
        if let Some(region) = region {
            layout.register_all(tables::region_key_codes(region));
        }
        layout
    }

    /// Region the table was built for.
    #[must_use]
    pub const fn region(&self) -> Option<KeyboardRegion> {
        self.region
    }

    /// Number of names mapped.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if no names are mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    fn register_all(&mut self, entries: &[KeyCodeEntry]) {
        for (code, names) in entries {
            for name in *names {
                let previous = self.codes.insert(name.to_lowercase(), *code);
                debug_assert!(previous.is_none(), "key name '{name}' registered twice");
            }
        }
    }
}

impl KeyCodeLookup for KeyboardLayout {
    fn resolve_key_code(&self, name: &str) -> Result<i32, ModelError> {
        self.codes
            .get(&name.to_lowercase())
            .copied()
            .ok_or_else(|| ModelError::UnknownKey(name.to_string()))
    }
}
