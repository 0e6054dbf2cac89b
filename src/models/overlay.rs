//! NohBoard output document.
//!
//! Field names and their order follow the NohBoard keyboard file format, so the
//! serde attributes here must not be reordered.

use crate::constants::NOHBOARD_FORMAT_VERSION;
use serde::{Deserialize, Serialize};

/// A point on the keyboard surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Coords {
    /// Horizontal position
    pub x: i32,
    /// Vertical position
    pub y: i32,
}

impl Coords {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Element kind tag written as `__type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ElementType {
    /// A plain key
    #[default]
    KeyboardKey,
}

/// One visual key on the rendered keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RenderedElement {
    /// Element kind
    #[serde(rename = "__type")]
    pub element_type: ElementType,
    /// Sequential element id, starting at 1
    pub id: i32,
    /// Corners clockwise from top-left
    pub boundaries: [Coords; 4],
    /// Codes that light the element up when all are pressed
    pub key_codes: Vec<i32>,
    /// Text shown on the element
    pub text: String,
    /// Anchor of the text
    pub text_position: Coords,
    /// Whether caps lock switches to the shift text
    pub change_on_caps: bool,
    /// Text shown while shift is held
    pub shift_text: String,
}

impl RenderedElement {
    /// Creates an element with an unassigned id (0).
    pub fn new(
        boundaries: [Coords; 4],
        text_position: Coords,
        key_codes: Vec<i32>,
        text: impl Into<String>,
    ) -> Self {
        let text = text.into();
        Self {
            element_type: ElementType::KeyboardKey,
            id: 0,
            boundaries,
            key_codes,
            shift_text: text.clone(),
            text,
            text_position,
            change_on_caps: false,
        }
    }

    /// Returns the bottom-right corner.
    #[must_use]
    pub const fn bottom_right(&self) -> Coords {
        self.boundaries[2]
    }
}

/// Root of a NohBoard keyboard file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NohboardConfig {
    /// All elements in id order
    pub elements: Vec<RenderedElement>,
    /// Surface height in pixels
    pub height: i32,
    /// Surface width in pixels
    pub width: i32,
    /// File format version
    pub version: i32,
}

impl NohboardConfig {
    /// Creates a document for the current format version.
    #[must_use]
    pub const fn new(elements: Vec<RenderedElement>, width: i32, height: i32) -> Self {
        Self {
            elements,
            height,
            width,
            version: NOHBOARD_FORMAT_VERSION,
        }
    }
}
