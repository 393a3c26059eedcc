use crate::{
    io::scanner::Scanner,
    tokenizer::{Token, TokenType, Tokenizer, TokenizerState, char_map::CharReferenceMap},
};

/// Reads a word: a run of characters marked as word characters.
///
/// The defaults are ASCII letters and digits, `-`, `_`, and the Latin-1 and
/// Basic Multilingual Plane letters from `0xC0` upward. The tokenizer decides
/// which characters may start a word; once started, any word character
/// continues it.
#[derive(Debug, Clone)]
pub struct GenericWordState {
    chars: CharReferenceMap<bool>,
}

impl GenericWordState {
    #[must_use]
    pub fn new() -> Self {
        Self { chars: CharReferenceMap::new(), }.with_chars('a', 'z', true)
                                                 .with_chars('A', 'Z', true)
                                                 .with_chars('0', '9', true)
                                                 .with_chars('-', '-', true)
                                                 .with_chars('_', '_', true)
                                                 .with_chars('\u{c0}', '\u{ff}', true)
                                                 .with_chars('\u{100}', char::MAX, true)
    }

    /// Marks `start..=end` as word characters or not.
    #[must_use]
    pub fn with_chars(mut self, start: char, end: char, enabled: bool) -> Self {
        self.chars.insert(start, end, enabled);
        self
    }

    /// Forgets every word character.
    #[must_use]
    pub fn cleared(mut self) -> Self {
        self.chars.clear();
        self
    }

    /// Reads the characters of a word without classifying it.
    pub fn read_word(&self, scanner: &mut dyn Scanner) -> String {
        let mut value = String::new();
        if let Some(first) = scanner.read() {
            value.push(first);
        }
        while let Some(ch) = scanner.peek()
              && self.is_word_char(ch)
        {
            scanner.read();
            value.push(ch);
        }
        value
    }

    fn is_word_char(&self, ch: char) -> bool {
        self.chars.lookup(ch).copied().unwrap_or(false)
    }
}

impl Default for GenericWordState {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerState for GenericWordState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let value = self.read_word(scanner);
        Token::new(TokenType::Word, value, line, column)
    }
}
