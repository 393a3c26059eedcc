use crate::{
    error::TokenizerError,
    io::scanner::Scanner,
    tokenizer::{
        QuoteState, StateRole, SymbolState, Token, TokenType, Tokenizer, TokenizerOptions,
        TokenizerState,
        states::{
            GenericSymbolState,
            quote::{decode_escaped, encode_escaped, read_escaped_quoted},
        },
    },
};

/// Field separators and quote characters of a CSV dialect.
///
/// Defaults to `,` as the only separator and `"` as the only quote.
///
/// # Example
/// ```
/// use formulary::tokenizer::CsvOptions;
///
/// let options = CsvOptions::new().field_separators(&['\t'])
///                                .quote_symbols(&['\'', '"']);
/// assert!(options.validate().is_ok());
///
/// let invalid = CsvOptions::new().quote_symbols(&[',']);
/// assert!(invalid.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    field_separators: Vec<char>,
    quote_symbols:    Vec<char>,
}

impl CsvOptions {
    #[must_use]
    pub fn new() -> Self {
        Self { field_separators: vec![','],
               quote_symbols:    vec!['"'], }
    }

    #[must_use]
    pub fn field_separators(mut self, separators: &[char]) -> Self {
        self.field_separators = separators.to_vec();
        self
    }

    #[must_use]
    pub fn quote_symbols(mut self, quotes: &[char]) -> Self {
        self.quote_symbols = quotes.to_vec();
        self
    }

    /// Checks that separators and quotes are usable together.
    ///
    /// Neither set may contain a line break or `\0`, and no character may be
    /// both a separator and a quote.
    ///
    /// # Errors
    /// Returns [`TokenizerError::InvalidCsvOptions`] describing the conflict.
    pub fn validate(&self) -> Result<(), TokenizerError> {
        let reserved = ['\r', '\n', '\0'];

        for separator in &self.field_separators {
            if reserved.contains(separator) || self.quote_symbols.contains(separator) {
                return Err(TokenizerError::InvalidCsvOptions { details: format!("invalid field separator {separator:?}") });
            }
        }
        for quote in &self.quote_symbols {
            if reserved.contains(quote) {
                return Err(TokenizerError::InvalidCsvOptions { details: format!("invalid quote symbol {quote:?}") });
            }
        }

        Ok(())
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Reports line breaks as `Eol` and every other character as a symbol.
///
/// `\r\n` and `\n\r` form a single line break.
#[derive(Debug, Clone, Default)]
pub struct CsvSymbolState {
    symbols: GenericSymbolState,
}

impl TokenizerState for CsvSymbolState {
    fn next_token(&self, scanner: &mut dyn Scanner, tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());

        match scanner.peek() {
            Some(first @ ('\r' | '\n')) => {
                scanner.read();
                let mut value = String::from(first);
                let pair = if first == '\r' { '\n' } else { '\r' };
                if scanner.peek() == Some(pair) {
                    scanner.read();
                    value.push(pair);
                }
                Token::new(TokenType::Eol, value, line, column)
            },
            _ => self.symbols.next_token(scanner, tokenizer),
        }
    }
}

impl SymbolState for CsvSymbolState {
    fn add(&mut self, value: &str, kind: TokenType) {
        self.symbols.add(value, kind);
    }
}

/// Reads quoted fields in which a doubled quote stands for one quote.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvQuoteState;

impl TokenizerState for CsvQuoteState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let value = read_escaped_quoted(scanner);
        Token::new(TokenType::Quoted, value, line, column)
    }
}

impl QuoteState for CsvQuoteState {
    fn encode_string(&self, value: &str, quote: char) -> String {
        encode_escaped(value, quote)
    }

    fn decode_string(&self, value: &str, quote: char) -> String {
        decode_escaped(value, quote)
    }
}

/// Reads an unquoted field up to the next separator, quote, or line break.
#[derive(Debug, Clone)]
pub struct CsvWordState {
    stop_chars: Vec<char>,
}

impl CsvWordState {
    #[must_use]
    pub fn new(options: &CsvOptions) -> Self {
        let mut stop_chars = vec!['\r', '\n'];
        stop_chars.extend(&options.field_separators);
        stop_chars.extend(&options.quote_symbols);
        Self { stop_chars }
    }
}

impl TokenizerState for CsvWordState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let mut value = String::new();

        while let Some(ch) = scanner.peek()
              && !self.stop_chars.contains(&ch)
        {
            scanner.read();
            value.push(ch);
        }

        Token::new(TokenType::Word, value, line, column)
    }
}

impl Tokenizer {
    /// Creates a tokenizer for comma separated values.
    ///
    /// Fields become `Word` or `Quoted` tokens, separators become `Symbol`
    /// tokens, and line breaks become `Eol` tokens.
    ///
    /// # Errors
    /// Returns [`TokenizerError::InvalidCsvOptions`] if the options do not
    /// validate.
    ///
    /// # Example
    /// ```
    /// use formulary::tokenizer::{CsvOptions, TokenType, Tokenizer};
    ///
    /// let tokenizer = Tokenizer::csv(&CsvOptions::new()).unwrap();
    /// let values = tokenizer.tokenize_to_strings("a,\"b \"\"c\"\"\"\n");
    ///
    /// assert_eq!(values, vec!["a", ",", "\"b \"\"c\"\"\"", "\n", ""]);
    /// ```
    pub fn csv(options: &CsvOptions) -> Result<Self, TokenizerError> {
        options.validate()?;

        let mut tokenizer = Self::new(TokenizerOptions::new())
            .with_word_state(CsvWordState::new(options))
            .with_symbol_state(CsvSymbolState::default())
            .with_quote_state(CsvQuoteState)
            .map_characters('\0', char::MAX, StateRole::Word)
            .map_characters('\r', '\r', StateRole::Symbol)
            .map_characters('\n', '\n', StateRole::Symbol);

        for &separator in &options.field_separators {
            tokenizer = tokenizer.map_characters(separator, separator, StateRole::Symbol);
        }
        for &quote in &options.quote_symbols {
            tokenizer = tokenizer.map_characters(quote, quote, StateRole::Quote);
        }

        Ok(tokenizer)
    }
}
