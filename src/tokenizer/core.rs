use tracing::trace;

use crate::{
    error::TokenizerError,
    io::scanner::{Scanner, StringScanner},
    tokenizer::{
        QuoteState, StateRole, SymbolState, Token, TokenType, TokenizerOptions, TokenizerState,
        char_map::CharReferenceMap,
    },
};

/// A table driven tokenizer.
///
/// The first character of the remaining input selects a [`StateRole`] through
/// the character map, and the state registered for that role reads one
/// token. Characters with no role, or whose state is missing, become
/// one-character `Unknown` tokens. The resulting tokens are filtered and
/// rewritten according to the [`TokenizerOptions`].
///
/// A tokenizer holds no per-run state, so the same instance can tokenize any
/// number of buffers.
pub struct Tokenizer {
    options:          TokenizerOptions,
    map:              CharReferenceMap<StateRole>,
    word_state:       Option<Box<dyn TokenizerState>>,
    number_state:     Option<Box<dyn TokenizerState>>,
    quote_state:      Option<Box<dyn QuoteState>>,
    symbol_state:     Option<Box<dyn SymbolState>>,
    whitespace_state: Option<Box<dyn TokenizerState>>,
    comment_state:    Option<Box<dyn TokenizerState>>,
}

impl Tokenizer {
    /// Creates a tokenizer with no states and an empty character map.
    #[must_use]
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options,
               map: CharReferenceMap::new(),
               word_state: None,
               number_state: None,
               quote_state: None,
               symbol_state: None,
               whitespace_state: None,
               comment_state: None }
    }

    /// Replaces the options, keeping states and character map.
    #[must_use]
    pub const fn with_options(mut self, options: TokenizerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_word_state(mut self, state: impl TokenizerState + 'static) -> Self {
        self.word_state = Some(Box::new(state));
        self
    }

    #[must_use]
    pub fn with_number_state(mut self, state: impl TokenizerState + 'static) -> Self {
        self.number_state = Some(Box::new(state));
        self
    }

    #[must_use]
    pub fn with_quote_state(mut self, state: impl QuoteState + 'static) -> Self {
        self.quote_state = Some(Box::new(state));
        self
    }

    #[must_use]
    pub fn with_symbol_state(mut self, state: impl SymbolState + 'static) -> Self {
        self.symbol_state = Some(Box::new(state));
        self
    }

    #[must_use]
    pub fn with_whitespace_state(mut self, state: impl TokenizerState + 'static) -> Self {
        self.whitespace_state = Some(Box::new(state));
        self
    }

    #[must_use]
    pub fn with_comment_state(mut self, state: impl TokenizerState + 'static) -> Self {
        self.comment_state = Some(Box::new(state));
        self
    }

    /// Returns the options of this tokenizer.
    #[must_use]
    pub const fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Dispatches the characters `start..=end` to the state with `role`.
    ///
    /// Later calls override earlier ones for overlapping ranges.
    ///
    /// # Errors
    /// Returns [`TokenizerError::InvalidInterval`] if `start > end`.
    pub fn set_character_state(&mut self,
                               start: char,
                               end: char,
                               role: StateRole)
                               -> Result<(), TokenizerError> {
        self.map.add_interval(start, end, role)
    }

    /// Removes every character dispatch.
    pub fn clear_character_states(&mut self) {
        self.map.clear();
    }

    /// Consuming variant of [`Tokenizer::set_character_state`] for building
    /// tokenizers from fixed ranges.
    pub(crate) fn map_characters(mut self, start: char, end: char, role: StateRole) -> Self {
        self.map.insert(start, end, role);
        self
    }

    /// Tokenizes `buffer`.
    ///
    /// # Example
    /// ```
    /// use formulary::tokenizer::{TokenType, Tokenizer, TokenizerOptions};
    ///
    /// let tokenizer = Tokenizer::generic().with_options(TokenizerOptions::new().skip_eof(true));
    /// let tokens = tokenizer.tokenize("1>2");
    ///
    /// assert_eq!(tokens.len(), 3);
    /// assert!(tokens[0].is(TokenType::Integer, "1"));
    /// assert!(tokens[1].is(TokenType::Symbol, ">"));
    /// ```
    #[must_use]
    pub fn tokenize(&self, buffer: &str) -> Vec<Token> {
        let mut scanner = StringScanner::new(buffer);
        self.tokenize_scanner(&mut scanner)
    }

    /// Tokenizes `buffer` and returns only the token texts.
    #[must_use]
    pub fn tokenize_to_strings(&self, buffer: &str) -> Vec<String> {
        self.tokenize(buffer)
            .into_iter()
            .map(|token| token.value)
            .collect()
    }

    /// Tokenizes everything the scanner has left.
    pub fn tokenize_scanner(&self, scanner: &mut dyn Scanner) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.read_next_token(scanner) {
            tokens.push(token);
        }

        if !self.options.skips_eof() {
            tokens.push(Token::new(TokenType::Eof, "", scanner.peek_line(), scanner.peek_column()));
        }

        trace!(count = tokens.len(), "tokenized buffer");
        tokens
    }

    /// Reads a token with the symbol state.
    ///
    /// States use this to give up on input they do not recognize, such as a
    /// lone `-` seen by a number state. Without a symbol state the next
    /// character is returned as an `Unknown` token.
    pub fn read_symbol(&self, scanner: &mut dyn Scanner) -> Token {
        if let Some(state) = &self.symbol_state {
            return state.next_token(scanner, self);
        }
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let value = scanner.read().map(String::from).unwrap_or_default();
        Token::new(TokenType::Unknown, value, line, column)
    }

    /// Decodes a quoted string with the quote state, if there is one.
    #[must_use]
    pub fn decode_string(&self, value: &str, quote: char) -> String {
        self.quote_state
            .as_ref()
            .map_or_else(|| value.to_string(), |state| state.decode_string(value, quote))
    }

    /// Encodes a string with the quote state, if there is one.
    #[must_use]
    pub fn encode_string(&self, value: &str, quote: char) -> String {
        self.quote_state
            .as_ref()
            .map_or_else(|| value.to_string(), |state| state.encode_string(value, quote))
    }

    fn state_for(&self, role: StateRole) -> Option<&dyn TokenizerState> {
        match role {
            StateRole::Word => self.word_state.as_deref(),
            StateRole::Number => self.number_state.as_deref(),
            StateRole::Whitespace => self.whitespace_state.as_deref(),
            StateRole::Comment => self.comment_state.as_deref(),
            StateRole::Quote => self.quote_state.as_deref().map(|s| s as &dyn TokenizerState),
            StateRole::Symbol => self.symbol_state.as_deref().map(|s| s as &dyn TokenizerState),
        }
    }

    fn read_next_token(&self, scanner: &mut dyn Scanner) -> Option<Token> {
        loop {
            let first = scanner.peek()?;
            let (line, column) = (scanner.peek_line(), scanner.peek_column());
            let role = self.map.lookup(first).copied();

            let token = role.and_then(|role| self.state_for(role))
                            .map(|state| state.next_token(scanner, self))
                            .filter(|token| !token.value.is_empty());

            let mut token = if let Some(token) = token {
                token
            } else {
                scanner.read();
                Token::new(TokenType::Unknown, first, line, column)
            };

            if role == Some(StateRole::Quote) && self.options.decodes_strings() {
                token.value = self.decode_string(&token.value, first);
            }

            match token.kind {
                TokenType::Unknown if self.options.skips_unknown() => continue,
                TokenType::Comment if self.options.skips_comments() => continue,
                TokenType::Whitespace if self.options.skips_whitespaces() => continue,
                TokenType::Whitespace if self.options.merges_whitespaces() => {
                    token.value = " ".to_string();
                },
                TokenType::Integer | TokenType::Float | TokenType::HexDecimal
                    if self.options.unifies_numbers() =>
                {
                    token.kind = TokenType::Number;
                },
                _ => {},
            }

            return Some(token);
        }
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
         .field("options", &self.options)
         .finish_non_exhaustive()
    }
}
