use crate::tokenizer::{
    StateRole, Tokenizer, TokenizerOptions,
    states::{
        GenericCommentState, GenericNumberState, GenericQuoteState, GenericSymbolState,
        GenericWhitespaceState, GenericWordState,
    },
};

impl Tokenizer {
    /// Creates a tokenizer for plain text.
    ///
    /// It recognizes words, signed decimal numbers, `"` and `'` quoted
    /// strings, `#` comments, whitespace, and the symbols `<>`, `<=` and
    /// `>=`. Every other Latin-1 character is a one-character symbol.
    ///
    /// # Example
    /// ```
    /// use formulary::tokenizer::{TokenType, Tokenizer};
    ///
    /// let tokens = Tokenizer::generic().tokenize("A <> -1.5 # done");
    /// let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
    ///
    /// assert_eq!(kinds,
    ///            vec![TokenType::Word,
    ///                 TokenType::Whitespace,
    ///                 TokenType::Symbol,
    ///                 TokenType::Whitespace,
    ///                 TokenType::Float,
    ///                 TokenType::Whitespace,
    ///                 TokenType::Comment,
    ///                 TokenType::Eof]);
    /// ```
    #[must_use]
    pub fn generic() -> Self {
        Self::new(TokenizerOptions::new())
            .with_symbol_state(GenericSymbolState::with_symbols(&["<>", "<=", ">="]))
            .with_number_state(GenericNumberState)
            .with_quote_state(GenericQuoteState)
            .with_whitespace_state(GenericWhitespaceState::new())
            .with_word_state(GenericWordState::new())
            .with_comment_state(GenericCommentState)
            .map_characters('\0', '\u{ff}', StateRole::Symbol)
            .map_characters('\0', ' ', StateRole::Whitespace)
            .map_characters('a', 'z', StateRole::Word)
            .map_characters('A', 'Z', StateRole::Word)
            .map_characters('\u{c0}', '\u{ff}', StateRole::Word)
            .map_characters('\u{100}', char::MAX, StateRole::Word)
            .map_characters('-', '-', StateRole::Number)
            .map_characters('0', '9', StateRole::Number)
            .map_characters('.', '.', StateRole::Number)
            .map_characters('"', '"', StateRole::Quote)
            .map_characters('\'', '\'', StateRole::Quote)
            .map_characters('#', '#', StateRole::Comment)
    }
}
