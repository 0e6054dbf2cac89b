//! NohBoard Generator Library
//!
//! This library turns a line-oriented keyboard definition into a NohBoard
//! keyboard file: the definition is parsed, typed into a keyboard model with
//! resolved key codes, laid out in pixels and serialized as JSON.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod keycode_db;
pub mod models;
pub mod parser;
pub mod services;

pub use error::{Error, LayoutError, ModelError};
pub use parser::ParseError;
pub use services::{GeneratedOverlay, Generator};
