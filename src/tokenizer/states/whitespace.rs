use crate::{
    io::scanner::Scanner,
    tokenizer::{Token, TokenType, Tokenizer, TokenizerState, char_map::CharReferenceMap},
};

/// Reads a run of whitespace characters.
///
/// By default every character from `\0` to the space character counts as
/// whitespace.
#[derive(Debug, Clone)]
pub struct GenericWhitespaceState {
    chars: CharReferenceMap<bool>,
}

impl GenericWhitespaceState {
    #[must_use]
    pub fn new() -> Self {
        Self { chars: CharReferenceMap::new(), }.with_chars('\0', ' ', true)
    }

    /// Marks `start..=end` as whitespace or not.
    #[must_use]
    pub fn with_chars(mut self, start: char, end: char, enabled: bool) -> Self {
        self.chars.insert(start, end, enabled);
        self
    }

    /// Forgets every whitespace character.
    #[must_use]
    pub fn cleared(mut self) -> Self {
        self.chars.clear();
        self
    }

    fn is_whitespace(&self, ch: char) -> bool {
        self.chars.lookup(ch).copied().unwrap_or(false)
    }
}

impl Default for GenericWhitespaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerState for GenericWhitespaceState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let mut value = String::new();

        while let Some(ch) = scanner.peek()
              && self.is_whitespace(ch)
        {
            scanner.read();
            value.push(ch);
        }

        Token::new(TokenType::Whitespace, value, line, column)
    }
}
