use crate::{
    io::scanner::Scanner,
    tokenizer::{Token, TokenType, Tokenizer},
};

/// The character classes a tokenizer dispatches on.
///
/// The character map of a tokenizer associates every character that may start
/// a token with one of these roles. The tokenizer then hands the scanner to
/// the state registered for that role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateRole {
    Word,
    Number,
    Quote,
    Symbol,
    Whitespace,
    Comment,
}

/// A recognizer that turns the characters at the scanner position into one
/// token.
///
/// A state is called with the scanner positioned on the first character of
/// the token. It must either consume at least one character or return a
/// token with an empty value, in which case the tokenizer reports the
/// character as `Unknown`. States that cannot handle the input may delegate
/// to the tokenizer's symbol state through [`Tokenizer::read_symbol`].
pub trait TokenizerState: Send + Sync {
    /// Reads the next token from `scanner`.
    fn next_token(&self, scanner: &mut dyn Scanner, tokenizer: &Tokenizer) -> Token;
}

/// A state for quoted strings that can also encode and decode them.
pub trait QuoteState: TokenizerState {
    /// Wraps `value` in `quote`, escaping it as needed.
    fn encode_string(&self, value: &str, quote: char) -> String;
    /// Strips the surrounding `quote` from `value` and resolves escapes.
    ///
    /// Values that are not wrapped in `quote` are returned unchanged.
    fn decode_string(&self, value: &str, quote: char) -> String;
}

/// A state for operators and punctuation.
pub trait SymbolState: TokenizerState {
    /// Registers a multi-character symbol reported with the given kind.
    fn add(&mut self, value: &str, kind: TokenType);
}
