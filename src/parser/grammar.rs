//! Grammar productions shared by header and keys-section lines.
//!
//! Each production starts at the tokenizer's cursor and leaves the cursor just
//! past what it consumed. Variables are resolved eagerly against the table
//! passed in, so only variables declared on earlier lines are visible.

use super::error::{Hint, ParseError};
use super::tokenizer::Tokenizer;
use crate::models::{Attribute, KeyNameSet, Variable, VariableTable};

/// Characters allowed in attribute and variable identifiers: `[a-zA-Z0-9_-]`.
#[must_use]
pub const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Characters allowed in unquoted values and key names: `[a-zA-Z0-9_.-]`.
#[must_use]
pub const fn is_simple_value_char(c: char) -> bool {
    is_identifier_char(c) || c == '.'
}

/// Describes the next character for error messages, consuming it.
fn describe_next(tokenizer: &mut Tokenizer) -> String {
    match tokenizer.next_char() {
        Ok(c) => format!("'{c}'"),
        Err(_) => "end of line".to_string(),
    }
}

/// Parses an attribute name, skipping leading whitespace.
pub fn attribute_identifier(tokenizer: &mut Tokenizer) -> Result<String, ParseError> {
    let identifier = tokenizer.next_all_matching(is_identifier_char, true)?;
    if identifier.is_empty() {
        let actual = describe_next(tokenizer);
        return Err(tokenizer.error(format!(
            "Expected attribute identifier ([a-zA-Z0-9_-]), but got {actual}"
        )));
    }
    Ok(identifier)
}

/// Parses a variable name directly after its `$`.
///
/// Whitespace between `$` and the name is not allowed.
pub fn variable_identifier(tokenizer: &mut Tokenizer) -> Result<String, ParseError> {
    let identifier = tokenizer.next_all_matching(is_identifier_char, false)?;
    if identifier.is_empty() {
        let actual = describe_next(tokenizer);
        return Err(tokenizer.error(format!(
            "Expected variable identifier ([a-zA-Z0-9_-]), but got {actual}"
        )));
    }
    Ok(identifier)
}

/// Resolves the character following a backslash. Only `\\`, `\"` and `\$` exist.
pub fn escape(tokenizer: &mut Tokenizer) -> Result<char, ParseError> {
    match tokenizer.next_char()? {
        c @ ('\\' | '"' | '$') => Ok(c),
        other => Err(tokenizer.error(format!("Unknown escape: \\{other}"))),
    }
}

/// Parses a variable reference (after its `$`) that must hold text.
pub fn value_variable(
    tokenizer: &mut Tokenizer,
    variables: &VariableTable,
) -> Result<String, ParseError> {
    let name = variable_identifier(tokenizer)?;
    match variables.get(&name) {
        Some(Variable::Value { text, .. }) => Ok(text.clone()),
        Some(Variable::Attributes { .. }) => Err(ParseError::NotAValueVariable {
            name,
            line: tokenizer.line(),
            column: tokenizer.column(),
        }),
        None => Err(ParseError::UnknownVariable {
            name,
            line: tokenizer.line(),
            column: tokenizer.column(),
        }),
    }
}

/// Parses a variable reference (after its `$`) that must hold attributes.
pub fn attribute_variable(
    tokenizer: &mut Tokenizer,
    variables: &VariableTable,
) -> Result<Vec<Attribute>, ParseError> {
    let name = variable_identifier(tokenizer)?;
    match variables.get(&name) {
        Some(Variable::Attributes { attributes, .. }) => Ok(attributes.clone()),
        Some(Variable::Value { .. }) => Err(ParseError::NotAnAttributeVariable {
            name,
            line: tokenizer.line(),
            column: tokenizer.column(),
        }),
        None => Err(ParseError::UnknownVariable {
            name,
            line: tokenizer.line(),
            column: tokenizer.column(),
        }),
    }
}

/// Parses a double-quoted text starting at the opening quote.
///
/// `$name` inside the quotes is interpolated and `\` starts an escape.
pub fn quoted_text(
    tokenizer: &mut Tokenizer,
    variables: &VariableTable,
) -> Result<String, ParseError> {
    let opening = tokenizer.next_char()?;
    debug_assert_eq!(opening, '"');

    let mut text = String::new();
    let mut chr = tokenizer.next_char()?;
    loop {
        match chr {
            '"' => return Ok(text),
            '$' => text.push_str(&value_variable(tokenizer, variables)?),
            '\\' => text.push(escape(tokenizer)?),
            other => text.push(other),
        }
        chr = match tokenizer.next_char() {
            Ok(c) => c,
            Err(_) => {
                return Err(ParseError::UnclosedQuote {
                    line: tokenizer.line(),
                })
            }
        };
    }
}

/// Parses an unquoted value: a run of simple characters or a whole `$name` reference.
pub fn simple_text(
    tokenizer: &mut Tokenizer,
    variables: &VariableTable,
) -> Result<String, ParseError> {
    if tokenizer.peek()? == '$' {
        tokenizer.next_char()?;
        return value_variable(tokenizer, variables);
    }

    let value = tokenizer.next_all_matching(is_simple_value_char, false)?;
    if value.is_empty() {
        let actual = tokenizer.peek()?;
        return Err(tokenizer.error_with_hint(
            format!("Unexpected character '{actual}'"),
            Hint::QuoteValue,
        ));
    }
    Ok(value)
}

/// Parses a value after `=`: quoted or simple text, after optional whitespace.
pub fn value(tokenizer: &mut Tokenizer, variables: &VariableTable) -> Result<String, ParseError> {
    tokenizer.skip_whitespace();
    if tokenizer.peek()? == '"' {
        quoted_text(tokenizer, variables)
    } else {
        simple_text(tokenizer, variables)
    }
}

/// Parses `identifier = value (, identifier = value)* ]`; the `[` is already consumed.
pub fn attribute_list(
    tokenizer: &mut Tokenizer,
    variables: &VariableTable,
) -> Result<Vec<Attribute>, ParseError> {
    let mut attributes = Vec::new();
    loop {
        let name = attribute_identifier(tokenizer)?;
        tokenizer.expect_char_after_optional_whitespace('=')?;
        let value = value(tokenizer, variables)?;
        attributes.push(Attribute::new(name, value));

        match tokenizer.next_non_whitespace()? {
            ']' => return Ok(attributes),
            ',' => {}
            other => return Err(tokenizer.error(format!("Unexpected character '{other}'"))),
        }
    }
}

/// Parses a key's display text: quoted, or unquoted up to the next whitespace.
///
/// Unquoted text interpolates `$name` and resolves escapes like quoted text does.
pub fn display_text(
    tokenizer: &mut Tokenizer,
    variables: &VariableTable,
) -> Result<String, ParseError> {
    if tokenizer.peek()? == '"' {
        return quoted_text(tokenizer, variables);
    }

    let mut text = String::new();
    while tokenizer.has_next() && !tokenizer.peek()?.is_whitespace() {
        match tokenizer.next_char()? {
            '$' => text.push_str(&value_variable(tokenizer, variables)?),
            '\\' => text.push(escape(tokenizer)?),
            other => text.push(other),
        }
    }
    Ok(text)
}

/// Parses one key name of a chord.
///
/// A name is quoted text, a run of simple characters, or a single other character
/// that must stand alone (followed by whitespace, `&` or the end of the line).
pub fn key_name(
    tokenizer: &mut Tokenizer,
    variables: &VariableTable,
) -> Result<String, ParseError> {
    let next = tokenizer.peek()?;
    if next == '"' {
        return quoted_text(tokenizer, variables);
    }
    if is_simple_value_char(next) {
        return tokenizer.next_all_matching(is_simple_value_char, false);
    }
    if matches!(next, '&' | '$' | '#') {
        return Err(tokenizer.error_with_hint(format!("Unexpected '{next}'"), Hint::QuoteName));
    }

    let key = tokenizer.next_char()?;
    if let Ok(following) = tokenizer.peek() {
        if !following.is_whitespace() && following != '&' {
            return Err(tokenizer.error_with_hint("Invalid key name", Hint::QuoteName));
        }
    }
    Ok(key.to_string())
}

/// Parses key names joined by `&` into one chord.
pub fn chord(
    tokenizer: &mut Tokenizer,
    variables: &VariableTable,
) -> Result<KeyNameSet, ParseError> {
    let mut names = KeyNameSet::default();
    loop {
        names.insert(key_name(tokenizer, variables)?);

        tokenizer.skip_whitespace();
        if !tokenizer.peek_is('&') {
            return Ok(names);
        }
        tokenizer.next_char()?;
        tokenizer.skip_whitespace();
        if !tokenizer.has_next() || tokenizer.peek_is('&') || tokenizer.peek_is('[') {
            let actual = describe_next(tokenizer);
            return Err(tokenizer.error(format!(
                "After ampersand, expect another key, but got {actual}"
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables() -> VariableTable {
        let mut table = VariableTable::new();
        table.insert(
            "prefix".to_string(),
            Variable::Value {
                name: "prefix".to_string(),
                text: "$".to_string(),
            },
        );
        table.insert(
            "small".to_string(),
            Variable::Attributes {
                name: "small".to_string(),
                attributes: vec![Attribute::new("width", "20")],
            },
        );
        table
    }

    #[test]
    fn test_quoted_text_escapes() {
        let mut tokenizer = Tokenizer::new(r#""T\"A" "[\\o=D]" "a,b,\$c""#, 1);
        let vars = VariableTable::new();
        assert_eq!(quoted_text(&mut tokenizer, &vars).unwrap(), "T\"A");
        tokenizer.skip_whitespace();
        assert_eq!(quoted_text(&mut tokenizer, &vars).unwrap(), "[\\o=D]");
        tokenizer.skip_whitespace();
        assert_eq!(quoted_text(&mut tokenizer, &vars).unwrap(), "a,b,$c");
        assert!(!tokenizer.has_next());
    }

    #[test]
    fn test_quoted_text_interpolates_value_variables() {
        let mut tokenizer = Tokenizer::new(r#""$prefix 1""#, 1);
        assert_eq!(quoted_text(&mut tokenizer, &variables()).unwrap(), "$ 1");
    }

    #[test]
    fn test_quoted_text_rejects_attribute_variables() {
        let mut tokenizer = Tokenizer::new(r#""$small""#, 6);
        let err = quoted_text(&mut tokenizer, &variables()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid variable usage of $small: variable contains attribute(s), not a value! on line 6, column 7"
        );
    }

    #[test]
    fn test_quoted_text_unknown_variable() {
        let mut tokenizer = Tokenizer::new(r#""$nope""#, 2);
        let err = quoted_text(&mut tokenizer, &variables()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown variable: $nope on line 2, column 6");
    }

    #[test]
    fn test_unknown_escape() {
        let mut tokenizer = Tokenizer::new(r#""te\a""#, 4);
        let err = quoted_text(&mut tokenizer, &VariableTable::new()).unwrap_err();
        assert_eq!(err.to_string(), "Unknown escape: \\a on line 4, column 5");
    }

    #[test]
    fn test_unclosed_quote() {
        let mut tokenizer = Tokenizer::new(r#""test\""#, 4);
        let err = quoted_text(&mut tokenizer, &VariableTable::new()).unwrap_err();
        assert_eq!(err, ParseError::UnclosedQuote { line: 4 });
    }

    #[test]
    fn test_simple_text_resolves_whole_variable() {
        let mut vars = VariableTable::new();
        vars.insert(
            "width".to_string(),
            Variable::Value {
                name: "width".to_string(),
                text: "40".to_string(),
            },
        );
        let mut tokenizer = Tokenizer::new("$width]", 1);
        assert_eq!(simple_text(&mut tokenizer, &vars).unwrap(), "40");
        assert!(tokenizer.peek_is(']'));
    }

    #[test]
    fn test_attribute_list() {
        let mut tokenizer = Tokenizer::new(" height= 20 , keyboard =de ]", 1);
        let attributes = attribute_list(&mut tokenizer, &VariableTable::new()).unwrap();
        assert_eq!(
            attributes,
            vec![Attribute::new("height", "20"), Attribute::new("keyboard", "de")]
        );
        assert!(!tokenizer.has_next());
    }

    #[test]
    fn test_attribute_variable_lookup() {
        let mut tokenizer = Tokenizer::new("small", 1);
        assert_eq!(
            attribute_variable(&mut tokenizer, &variables()).unwrap(),
            vec![Attribute::new("width", "20")]
        );

        let mut tokenizer = Tokenizer::new("prefix", 3);
        let err = attribute_variable(&mut tokenizer, &variables()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Variable $prefix is not an attribute variable on line 3, column 6"
        );
    }

    #[test]
    fn test_display_text_unquoted_with_escape_and_variable() {
        let mut tokenizer = Tokenizer::new(r"$prefix\\x Q", 1);
        assert_eq!(display_text(&mut tokenizer, &variables()).unwrap(), "$\\x");
        assert!(tokenizer.peek_is(' '));
    }

    #[test]
    fn test_key_name_single_special_character() {
        let mut tokenizer = Tokenizer::new("/ ", 1);
        assert_eq!(key_name(&mut tokenizer, &VariableTable::new()).unwrap(), "/");
    }

    #[test]
    fn test_key_name_rejects_glued_special_characters() {
        let mut tokenizer = Tokenizer::new("Jmp +? A", 1);
        tokenizer.next_all_matching(is_simple_value_char, false).unwrap();
        tokenizer.skip_whitespace();
        let err = key_name(&mut tokenizer, &VariableTable::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid key name on line 1, column 5. Wrap complex names in double quotes"
        );
    }

    #[test]
    fn test_chord_collects_names() {
        let mut tokenizer = Tokenizer::new("Alt & Shift & G [x=1]", 1);
        let names = chord(&mut tokenizer, &VariableTable::new()).unwrap();
        assert_eq!(names, KeyNameSet::new(["Alt", "Shift", "G"]));
        assert!(tokenizer.peek_is('['));
    }
}
