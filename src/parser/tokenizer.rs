//! Character cursor over a single definition line.

use super::error::{Hint, ParseError};

/// Walks one line character by character.
///
/// Every token of the definition language lives on a single line, so a tokenizer
/// is created per line and knows its 1-based line number for error messages.
/// Columns in errors are the 0-based cursor index at the moment of failure.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    chars: Vec<char>,
    line: usize,
    pos: usize,
}

impl Tokenizer {
    /// Wraps `text`, which comes from line `line` of the input.
    #[must_use]
    pub fn new(text: &str, line: usize) -> Self {
        Self {
            chars: text.chars().collect(),
            line,
            pos: 0,
        }
    }

    /// 1-based line number of the wrapped text.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Current cursor position.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.pos
    }

    /// Returns true if characters remain.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.pos < self.chars.len()
    }

    /// Returns the next character without consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedEndOfLine`] if the line is exhausted.
    pub fn peek(&self) -> Result<char, ParseError> {
        self.chars
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.end_of_line())
    }

    /// Returns true if the next character is `expected`. Never fails.
    #[must_use]
    pub fn peek_is(&self, expected: char) -> bool {
        self.chars.get(self.pos) == Some(&expected)
    }

    /// Consumes and returns the next character.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedEndOfLine`] if the line is exhausted.
    pub fn next_char(&mut self) -> Result<char, ParseError> {
        let chr = self.peek()?;
        self.pos += 1;
        Ok(chr)
    }

    /// Skips whitespace, then consumes the next character.
    pub fn next_non_whitespace(&mut self) -> Result<char, ParseError> {
        self.skip_whitespace();
        self.next_char()
    }

    /// Advances past any whitespace at the cursor.
    pub fn skip_whitespace(&mut self) {
        while self.chars.get(self.pos).is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    /// Consumes the longest run of characters matching `predicate`.
    ///
    /// The returned text may be empty if the next character does not match.
    ///
    /// # Errors
    ///
    /// Fails only if nothing was consumed and the line is exhausted.
    pub fn next_all_matching<P>(
        &mut self,
        predicate: P,
        skip_leading_whitespace: bool,
    ) -> Result<String, ParseError>
    where
        P: Fn(char) -> bool,
    {
        if skip_leading_whitespace {
            self.skip_whitespace();
        }

        let start = self.pos;
        while self.chars.get(self.pos).is_some_and(|&c| predicate(c)) {
            self.pos += 1;
        }

        if start == self.pos && !self.has_next() {
            return Err(self.end_of_line());
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }

    /// Consumes the next non-whitespace character and checks that it is `expected`.
    ///
    /// # Errors
    ///
    /// Fails if the line ends first or a different character is found.
    pub fn expect_char_after_optional_whitespace(&mut self, expected: char) -> Result<(), ParseError> {
        let actual = self.next_non_whitespace()?;
        if actual == expected {
            Ok(())
        } else {
            Err(self.error(format!("Expected '{expected}' but got '{actual}'")))
        }
    }

    /// Returns true if the line is exhausted or a comment starts at the cursor.
    #[must_use]
    pub fn is_empty_or_has_comment_start(&self) -> bool {
        !self.has_next() || self.peek_is('#')
    }

    /// Exhausts the tokenizer.
    pub fn move_to_end(&mut self) {
        self.pos = self.chars.len();
    }

    /// Error for a premature end of this line.
    #[must_use]
    pub const fn end_of_line(&self) -> ParseError {
        ParseError::UnexpectedEndOfLine { line: self.line }
    }

    /// Positional error at the current cursor.
    pub fn error(&self, message: impl Into<String>) -> ParseError {
        self.error_with_hint(message, Hint::None)
    }

    /// Positional error at the current cursor with a suggestion.
    pub fn error_with_hint(&self, message: impl Into<String>, hint: Hint) -> ParseError {
        ParseError::Syntax {
            message: message.into(),
            line: self.line,
            column: self.pos,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_returns_characters_in_order() {
        let mut tokenizer = Tokenizer::new("abcd", 12);
        assert_eq!(tokenizer.next_char().unwrap(), 'a');
        assert_eq!(tokenizer.next_char().unwrap(), 'b');
        assert_eq!(tokenizer.next_char().unwrap(), 'c');
        assert!(tokenizer.has_next());
    }

    #[test]
    fn test_next_all_matching() {
        let mut first = Tokenizer::new("1337 hacks", 3);
        let mut second = Tokenizer::new("1337", 3);

        assert_eq!(first.next_all_matching(|c| c.is_ascii_digit(), false).unwrap(), "1337");
        assert_eq!(first.next_char().unwrap(), ' ');
        assert_eq!(second.next_all_matching(|c| c.is_ascii_digit(), false).unwrap(), "1337");
        assert!(!second.has_next());
    }

    #[test]
    fn test_next_all_matching_returns_empty_on_mismatch() {
        let mut tokenizer = Tokenizer::new("1337 hacks", 3);
        assert_eq!(tokenizer.next_all_matching(char::is_whitespace, false).unwrap(), "");
        assert_eq!(tokenizer.next_char().unwrap(), '1');
    }

    #[test]
    fn test_next_all_matching_skipping_whitespace() {
        let mut digits = Tokenizer::new("  1337 hacks", 1);
        let mut letters = Tokenizer::new("  abc", 1);
        let mut glued = Tokenizer::new("1337hacks", 1);

        assert_eq!(digits.next_all_matching(|c| c.is_ascii_digit(), true).unwrap(), "1337");
        assert_eq!(digits.next_char().unwrap(), ' ');
        assert_eq!(letters.next_all_matching(|c| c.is_ascii_digit(), true).unwrap(), "");
        assert_eq!(letters.next_char().unwrap(), 'a');
        assert_eq!(glued.next_all_matching(|c| c.is_ascii_digit(), true).unwrap(), "1337");
        assert_eq!(glued.next_char().unwrap(), 'h');
    }

    #[test]
    fn test_peek_does_not_advance() {
        let tokenizer = Tokenizer::new("The quick brown fox", 1);
        assert_eq!(tokenizer.peek().unwrap(), 'T');
        assert_eq!(tokenizer.peek().unwrap(), 'T');
        assert_eq!(tokenizer.column(), 0);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut padded = Tokenizer::new("   Test", 3);
        let mut plain = Tokenizer::new("Test", 4);
        padded.skip_whitespace();
        plain.skip_whitespace();
        assert_eq!(padded.next_char().unwrap(), 'T');
        assert_eq!(plain.next_char().unwrap(), 'T');
    }

    #[test]
    fn test_next_non_whitespace() {
        let mut tokenizer = Tokenizer::new("  ; #", 3);
        assert_eq!(tokenizer.next_non_whitespace().unwrap(), ';');
        assert_eq!(tokenizer.next_non_whitespace().unwrap(), '#');
    }

    #[test]
    fn test_expect_char_mismatch() {
        let mut tokenizer = Tokenizer::new("test: d", 12);
        tokenizer.next_all_matching(char::is_alphabetic, false).unwrap();
        let err = tokenizer.expect_char_after_optional_whitespace('=').unwrap_err();
        assert_eq!(err.to_string(), "Expected '=' but got ':' on line 12, column 5");
    }

    #[test]
    fn test_expect_char_match() {
        let mut tokenizer = Tokenizer::new("  = 3", 1);
        tokenizer.expect_char_after_optional_whitespace('=').unwrap();
        assert_eq!(tokenizer.column(), 3);
    }

    #[test]
    fn test_error_reports_cursor_column() {
        let mut tokenizer = Tokenizer::new("1337 hacks", 17);
        tokenizer.next_all_matching(|c| c.is_ascii_digit(), false).unwrap();
        assert_eq!(
            tokenizer.error("Boom").to_string(),
            "Boom on line 17, column 4"
        );
    }

    #[test]
    fn test_end_of_line_errors() {
        let mut tokenizer = Tokenizer::new("a   ", 4);
        tokenizer.next_char().unwrap();

        assert!(tokenizer.clone().next_non_whitespace().is_err());
        let err = tokenizer
            .next_all_matching(|c| c.is_alphabetic(), true)
            .unwrap_err();
        assert_eq!(err.to_string(), "Unexpected end of line on line 4");
        assert_eq!(tokenizer.peek().unwrap_err().to_string(), "Unexpected end of line on line 4");
        assert_eq!(
            tokenizer.next_char().unwrap_err(),
            ParseError::UnexpectedEndOfLine { line: 4 }
        );
    }

    #[test]
    fn test_comment_start_and_move_to_end() {
        let mut tokenizer = Tokenizer::new("# note", 1);
        assert!(tokenizer.is_empty_or_has_comment_start());
        tokenizer.move_to_end();
        assert!(!tokenizer.has_next());
        assert!(tokenizer.is_empty_or_has_comment_start());
    }

    #[test]
    fn test_columns_count_characters_not_bytes() {
        let mut tokenizer = Tokenizer::new("îx", 1);
        tokenizer.next_char().unwrap();
        assert_eq!(tokenizer.column(), 1);
        assert_eq!(tokenizer.next_char().unwrap(), 'x');
    }
}
