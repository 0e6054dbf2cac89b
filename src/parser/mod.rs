//! Parsing of keyboard definition files.
//!
//! Definitions are read line by line: [`tokenizer`] walks a single line,
//! [`grammar`] holds the productions shared between sections and
//! [`definition`] drives the header/keys state machine.

pub mod definition;
pub mod error;
pub mod grammar;
pub mod tokenizer;

// Re-export commonly used items
pub use definition::{parse_definition, ParseContext, Section};
pub use error::{Hint, ParseError};
pub use tokenizer::Tokenizer;
