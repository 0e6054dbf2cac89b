//! Data models for keyboard definitions, typed layouts and the rendered overlay.
//!
//! Models are plain data and carry no parsing or layout logic.

pub mod definition;
pub mod keyboard;
pub mod overlay;
pub mod unit;

// Re-export all model types
pub use definition::{
    Attribute, KeyLine, KeyNameSet, KeyRow, KeyboardLine, ParsedDefinition, Variable, VariableTable,
};
pub use keyboard::{KeyBinding, KeyDefinition, KeyboardConfig, KeyboardRow};
pub use overlay::{Coords, ElementType, NohboardConfig, RenderedElement};
pub use unit::{Unit, ValueWithUnit};
