//! Service layer for business logic.
//!
//! Attribute typing, model building and layout are pure functions over the
//! parsed definition; [`Generator`] chains them together.

pub mod attributes;
pub mod generator;
pub mod geometry;
pub mod model;

// Re-export commonly used types and functions
pub use generator::{GeneratedOverlay, Generator};
pub use model::KeyboardModelBuilder;
