//! Line-by-line state machine for keyboard definition files.
//!
//! A definition has a header section (attributes, variables, comments) followed
//! by a keys section introduced by a `Keys:` line. Rows of keys are separated by
//! blank lines.
//!
//! # Example
//!
//! ```text
//! [keyboard=en-us]
//! $big = [width=2k]
//!
//! Keys:
//! Esc Escape
//! "Jump!" Space $big
//! Econ LeftAlt & R RightAlt & R
//! ```

use tracing::debug;

use super::error::ParseError;
use super::grammar;
use super::tokenizer::Tokenizer;
use crate::models::{
    Attribute, KeyLine, KeyRow, KeyboardLine, ParsedDefinition, Variable, VariableTable,
};

/// Section the parser is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Before the `Keys:` line
    #[default]
    Header,
    /// After the `Keys:` line
    Keys,
}

/// Mutable state of one parse.
///
/// The symbol tables live for the whole document, so a context must not be
/// reused for a second document.
#[derive(Debug, Default)]
pub struct ParseContext {
    attributes: Vec<Attribute>,
    variables: VariableTable,
    rows: Vec<KeyRow>,
    current_row: KeyRow,
    section: Section,
}

impl ParseContext {
    /// Creates an empty context in the header section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current section.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Top-level attributes declared so far.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Variables declared so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Parses one line, updating the context.
    ///
    /// # Arguments
    ///
    /// * `text` - Line content without its line terminator
    /// * `line` - 1-based line number
    ///
    /// # Errors
    ///
    /// Returns the first grammar or declaration error found on the line.
    pub fn parse_line(&mut self, text: &str, line: usize) -> Result<(), ParseError> {
        let mut tokenizer = Tokenizer::new(text, line);
        match self.section {
            Section::Header => {
                if self.parse_header_line(&mut tokenizer)? {
                    debug!("Keys section starts on line {}", line);
                    self.section = Section::Keys;
                }
            }
            Section::Keys => {
                let result = self.parse_keys_line(&mut tokenizer)?;
                self.apply(result);
            }
        }
        debug_assert!(!tokenizer.has_next(), "line {line} not fully consumed");
        Ok(())
    }

    /// Parses a header line. Returns true if the line starts the keys section.
    pub fn parse_header_line(&mut self, tokenizer: &mut Tokenizer) -> Result<bool, ParseError> {
        tokenizer.skip_whitespace();
        if !tokenizer.has_next() {
            return Ok(false);
        }

        match tokenizer.next_char()? {
            '#' => {
                tokenizer.move_to_end();
                Ok(false)
            }
            '[' => {
                let attributes = grammar::attribute_list(tokenizer, &self.variables)?;
                for attribute in attributes {
                    self.declare_attribute(attribute, tokenizer.line())?;
                }
                expect_end_of_content(tokenizer)?;
                Ok(false)
            }
            '$' => {
                let variable = self.parse_variable_declaration(tokenizer)?;
                self.declare_variable(variable, tokenizer.line())?;
                expect_end_of_content(tokenizer)?;
                Ok(false)
            }
            first => {
                expect_keys_section(first, tokenizer)?;
                Ok(true)
            }
        }
    }

    /// Parses a line of the keys section without changing the context.
    pub fn parse_keys_line(&self, tokenizer: &mut Tokenizer) -> Result<KeyboardLine, ParseError> {
        tokenizer.skip_whitespace();
        if !tokenizer.has_next() {
            return Ok(KeyboardLine::RowEnd);
        }
        if tokenizer.peek_is('#') {
            tokenizer.move_to_end();
            return Ok(KeyboardLine::Ignored);
        }
        if tokenizer.peek_is('[') {
            tokenizer.next_char()?;
            return self.parse_row_attributes(tokenizer).map(KeyboardLine::RowAttributes);
        }

        let display_text = grammar::display_text(tokenizer, &self.variables)?;
        let mut bindings = Vec::new();
        let mut attributes = Vec::new();

        tokenizer.skip_whitespace();
        while tokenizer.has_next() {
            match tokenizer.peek()? {
                '[' => {
                    tokenizer.next_char()?;
                    attributes.extend(grammar::attribute_list(tokenizer, &self.variables)?);
                }
                '#' => tokenizer.move_to_end(),
                '$' => {
                    tokenizer.next_char()?;
                    attributes.extend(grammar::attribute_variable(tokenizer, &self.variables)?);
                }
                _ => bindings.push(grammar::chord(tokenizer, &self.variables)?),
            }
            tokenizer.skip_whitespace();
        }

        if bindings.is_empty() {
            return Err(ParseError::MissingBinding {
                text: display_text,
                line: tokenizer.line(),
            });
        }

        Ok(KeyboardLine::Key(KeyLine {
            display_text,
            bindings,
            attributes,
            line: tokenizer.line(),
        }))
    }

    /// Applies a keys-section result to the row accumulator.
    pub fn apply(&mut self, result: KeyboardLine) {
        match result {
            KeyboardLine::Key(key) => self.current_row.keys.push(key),
            KeyboardLine::RowAttributes(attributes) => self.current_row.attributes.extend(attributes),
            KeyboardLine::RowEnd => self.close_row(),
            KeyboardLine::Ignored => {}
        }
    }

    /// Closes the last row and returns everything parsed.
    #[must_use]
    pub fn finish(mut self) -> ParsedDefinition {
        self.close_row();
        debug!(
            "Parsed {} attribute(s), {} variable(s), {} row(s)",
            self.attributes.len(),
            self.variables.len(),
            self.rows.len()
        );
        ParsedDefinition {
            attributes: self.attributes,
            variables: self.variables,
            rows: self.rows,
        }
    }

    /// Row attributes: one or more bracket groups and nothing else.
    fn parse_row_attributes(&self, tokenizer: &mut Tokenizer) -> Result<Vec<Attribute>, ParseError> {
        let mut attributes = grammar::attribute_list(tokenizer, &self.variables)?;
        loop {
            tokenizer.skip_whitespace();
            if !tokenizer.has_next() {
                return Ok(attributes);
            }
            let chr = tokenizer.next_char()?;
            if chr != '[' {
                return Err(tokenizer.error(format!(
                    "Expected only attributes to be declared, but found '{chr}'"
                )));
            }
            attributes.extend(grammar::attribute_list(tokenizer, &self.variables)?);
        }
    }

    /// Parses `name = value`, `name = "text"` or `name = [attributes]` after the `$`.
    fn parse_variable_declaration(&self, tokenizer: &mut Tokenizer) -> Result<Variable, ParseError> {
        let name = grammar::variable_identifier(tokenizer)?;
        tokenizer.expect_char_after_optional_whitespace('=')?;

        tokenizer.skip_whitespace();
        if tokenizer.peek()? == '[' {
            tokenizer.next_char()?;
            let attributes = grammar::attribute_list(tokenizer, &self.variables)?;
            return Ok(Variable::Attributes { name, attributes });
        }
        let text = grammar::value(tokenizer, &self.variables)?;
        Ok(Variable::Value { name, text })
    }

    fn declare_attribute(&mut self, attribute: Attribute, line: usize) -> Result<(), ParseError> {
        if self.attributes.iter().any(|existing| existing.name == attribute.name) {
            return Err(ParseError::DuplicateAttribute {
                name: attribute.name,
                line,
            });
        }
        self.attributes.push(attribute);
        Ok(())
    }

    fn declare_variable(&mut self, variable: Variable, line: usize) -> Result<(), ParseError> {
        if self.variables.contains_key(variable.name()) {
            return Err(ParseError::DuplicateVariable {
                name: variable.name().to_string(),
                line,
            });
        }
        self.variables.insert(variable.name().to_string(), variable);
        Ok(())
    }

    fn close_row(&mut self) {
        if self.current_row.has_keys() {
            self.rows.push(std::mem::take(&mut self.current_row));
        }
    }
}

/// Checks that `first` plus the rest of the line spell `Keys:` (case-insensitive).
fn expect_keys_section(first: char, tokenizer: &mut Tokenizer) -> Result<(), ParseError> {
    let line = tokenizer.line();
    if !first.eq_ignore_ascii_case(&'k') {
        return Err(ParseError::InvalidSyntax { line });
    }
    for expected in ['e', 'y', 's'] {
        if !tokenizer.next_char()?.eq_ignore_ascii_case(&expected) {
            return Err(ParseError::InvalidSyntax { line });
        }
    }
    tokenizer.expect_char_after_optional_whitespace(':')?;
    expect_end_of_content(tokenizer)
}

/// Requires the rest of the line to be whitespace or a comment, then exhausts it.
fn expect_end_of_content(tokenizer: &mut Tokenizer) -> Result<(), ParseError> {
    tokenizer.skip_whitespace();
    if !tokenizer.is_empty_or_has_comment_start() {
        let chr = tokenizer.next_char()?;
        return Err(tokenizer.error(format!("Expected end of line, but got '{chr}'")));
    }
    tokenizer.move_to_end();
    Ok(())
}

/// Parses a complete definition.
///
/// # Errors
///
/// Returns the first error found; there is no recovery.
pub fn parse_definition<I, S>(lines: I) -> Result<ParsedDefinition, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut context = ParseContext::new();
    for (index, line) in lines.into_iter().enumerate() {
        context.parse_line(line.as_ref(), index + 1)?;
    }
    Ok(context.finish())
}
