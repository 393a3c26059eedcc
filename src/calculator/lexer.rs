use crate::{
    io::scanner::Scanner,
    tokenizer::{
        QuoteState, StateRole, Token, TokenType, Tokenizer, TokenizerOptions, TokenizerState,
        states::{
            CppCommentState, GenericSymbolState, GenericWhitespaceState, GenericWordState,
            number::{read_decimal, read_digits},
            quote::{decode_escaped, encode_escaped, read_escaped_quoted},
        },
    },
};

/// Words that are operators or literals rather than identifiers.
pub const KEYWORDS: [&str; 10] = ["AND", "OR", "NOT", "XOR", "LIKE", "IS", "IN", "NULL", "TRUE", "FALSE"];

/// Returns `true` if `word` is an expression keyword, in any letter case.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(word))
}

/// Reads numbers in expressions.
///
/// - A leading `-` is always an operator, so it goes to the symbol state.
/// - `0x` followed by hex digits is a [`TokenType::HexDecimal`].
/// - Decimal numbers may carry an exponent such as `1e-3`, which makes them a
///   [`TokenType::Float`]. An `e` without digits is left for the next token.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionNumberState;

impl TokenizerState for ExpressionNumberState {
    fn next_token(&self, scanner: &mut dyn Scanner, tokenizer: &Tokenizer) -> Token {
        if scanner.peek() == Some('-') {
            return tokenizer.read_symbol(scanner);
        }

        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let mut value = String::new();

        let (has_digits, has_fraction) = read_decimal(scanner, &mut value);
        if !has_digits {
            scanner.unread_many(value.chars().count());
            return tokenizer.read_symbol(scanner);
        }

        if value == "0"
           && let Some(marker @ ('x' | 'X')) = scanner.peek()
        {
            scanner.read();
            let mut digits = String::new();
            if read_digits(scanner, &mut digits, |ch| ch.is_ascii_hexdigit()) {
                return Token::new(TokenType::HexDecimal, format!("0{marker}{digits}"), line, column);
            }
            scanner.unread();
            return Token::new(TokenType::Integer, value, line, column);
        }

        let mut kind = if has_fraction { TokenType::Float } else { TokenType::Integer };
        if read_exponent(scanner, &mut value) {
            kind = TokenType::Float;
        }

        Token::new(kind, value, line, column)
    }
}

/// Appends an exponent such as `e+10` to `value`.
///
/// Nothing is consumed unless the exponent has at least one digit.
fn read_exponent(scanner: &mut dyn Scanner, value: &mut String) -> bool {
    let Some(marker @ ('e' | 'E')) = scanner.peek() else {
        return false;
    };
    scanner.read();

    let mut exponent = String::from(marker);
    if let Some(sign @ ('+' | '-')) = scanner.peek() {
        scanner.read();
        exponent.push(sign);
    }

    if !read_digits(scanner, &mut exponent, |ch| ch.is_ascii_digit()) {
        scanner.unread_many(exponent.chars().count());
        return false;
    }

    value.push_str(&exponent);
    true
}

/// Reads identifiers and keywords.
///
/// Identifiers are made of letters, digits and `_`. Keywords are reported as
/// [`TokenType::Keyword`], identifiers as [`TokenType::Word`].
#[derive(Debug, Clone)]
pub struct ExpressionWordState {
    word: GenericWordState,
}

impl ExpressionWordState {
    #[must_use]
    pub fn new() -> Self {
        let word = GenericWordState::new().cleared()
                                          .with_chars('a', 'z', true)
                                          .with_chars('A', 'Z', true)
                                          .with_chars('0', '9', true)
                                          .with_chars('_', '_', true)
                                          .with_chars('\u{c0}', '\u{ff}', true)
                                          .with_chars('\u{100}', char::MAX, true);
        Self { word }
    }
}

impl Default for ExpressionWordState {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenizerState for ExpressionWordState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let value = self.word.read_word(scanner);
        let kind = if is_keyword(&value) { TokenType::Keyword } else { TokenType::Word };
        Token::new(kind, value, line, column)
    }
}

/// Reads quoted strings and quoted identifiers.
///
/// Text in single quotes is a string constant, text in double quotes is an
/// identifier that may contain any character. Inside either, a doubled quote
/// stands for the quote itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionQuoteState;

impl TokenizerState for ExpressionQuoteState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let value = read_escaped_quoted(scanner);
        let kind = if value.starts_with('"') { TokenType::Word } else { TokenType::Quoted };
        Token::new(kind, value, line, column)
    }
}

impl QuoteState for ExpressionQuoteState {
    fn encode_string(&self, value: &str, quote: char) -> String {
        encode_escaped(value, quote)
    }

    fn decode_string(&self, value: &str, quote: char) -> String {
        decode_escaped(value, quote)
    }
}

impl Tokenizer {
    /// Creates the tokenizer for calculator expressions.
    ///
    /// Recognizes identifiers, keywords, unsigned numbers, `'strings'`,
    /// `"quoted identifiers"`, C style comments, and the operators `<=`,
    /// `>=`, `<>`, `!=`, `<<` and `>>`. Strings are left encoded; the parser
    /// turns decoding on.
    ///
    /// # Example
    /// ```
    /// use formulary::tokenizer::{TokenType, Tokenizer};
    ///
    /// let tokens = Tokenizer::expression().tokenize("A<=1e3 and 'x'");
    /// let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
    ///
    /// assert_eq!(kinds,
    ///            vec![TokenType::Word,
    ///                 TokenType::Symbol,
    ///                 TokenType::Float,
    ///                 TokenType::Whitespace,
    ///                 TokenType::Keyword,
    ///                 TokenType::Whitespace,
    ///                 TokenType::Quoted,
    ///                 TokenType::Eof]);
    /// ```
    #[must_use]
    pub fn expression() -> Self {
        let symbols = GenericSymbolState::with_symbols(&["<=", ">=", "<>", "!=", "<<", ">>"]);

        Self::new(TokenizerOptions::new())
            .with_whitespace_state(GenericWhitespaceState::new())
            .with_symbol_state(symbols)
            .with_number_state(ExpressionNumberState)
            .with_quote_state(ExpressionQuoteState)
            .with_word_state(ExpressionWordState::new())
            .with_comment_state(CppCommentState::new())
            .map_characters('\0', char::MAX, StateRole::Symbol)
            .map_characters('\0', ' ', StateRole::Whitespace)
            .map_characters('a', 'z', StateRole::Word)
            .map_characters('A', 'Z', StateRole::Word)
            .map_characters('\u{c0}', '\u{ff}', StateRole::Word)
            .map_characters('_', '_', StateRole::Word)
            .map_characters('0', '9', StateRole::Number)
            .map_characters('-', '-', StateRole::Number)
            .map_characters('.', '.', StateRole::Number)
            .map_characters('"', '"', StateRole::Quote)
            .map_characters('\'', '\'', StateRole::Quote)
            .map_characters('/', '/', StateRole::Comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(source: &str) -> Vec<String> {
        Tokenizer::expression().with_options(TokenizerOptions::new().skip_eof(true))
                               .tokenize_to_strings(source)
    }

    #[test]
    fn minus_is_always_a_symbol() {
        assert_eq!(strings("-1"), vec!["-", "1"]);
    }

    #[test]
    fn reads_hex_and_exponents() {
        let tokens = Tokenizer::expression().tokenize("0x1F 2E5 3e");
        assert!(tokens[0].is(TokenType::HexDecimal, "0x1F"));
        assert!(tokens[2].is(TokenType::Float, "2E5"));
        assert!(tokens[4].is(TokenType::Integer, "3"));
        assert!(tokens[5].is(TokenType::Word, "e"));
    }

    #[test]
    fn keywords_ignore_case() {
        let tokens = Tokenizer::expression().tokenize("Not nothing");
        assert!(tokens[0].is(TokenType::Keyword, "Not"));
        assert!(tokens[2].is(TokenType::Word, "nothing"));
    }

    #[test]
    fn double_quotes_make_identifiers() {
        let tokens = Tokenizer::expression().tokenize("\"a b\" 'c''d'");
        assert!(tokens[0].is(TokenType::Word, "\"a b\""));
        assert!(tokens[2].is(TokenType::Quoted, "'c''d'"));
    }
}
