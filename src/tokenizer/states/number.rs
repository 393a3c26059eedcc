use crate::{
    io::scanner::Scanner,
    tokenizer::{Token, TokenType, Tokenizer, TokenizerState},
};

/// Reads a decimal number with an optional leading minus and fraction.
///
/// Input such as a lone `-` or `.` that contains no digit is handed back to
/// the tokenizer's symbol state.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericNumberState;

impl TokenizerState for GenericNumberState {
    fn next_token(&self, scanner: &mut dyn Scanner, tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let mut value = String::new();

        if scanner.peek() == Some('-') {
            scanner.read();
            value.push('-');
        }

        let (has_digits, has_fraction) = read_decimal(scanner, &mut value);
        if !has_digits {
            scanner.unread_many(value.chars().count());
            return tokenizer.read_symbol(scanner);
        }

        let kind = if has_fraction { TokenType::Float } else { TokenType::Integer };
        Token::new(kind, value, line, column)
    }
}

/// Reads digits, an optional `.`, and more digits into `value`.
///
/// Returns whether any digit was read and whether a `.` was read.
pub fn read_decimal(scanner: &mut dyn Scanner, value: &mut String) -> (bool, bool) {
    let mut has_digits = read_digits(scanner, value, |ch| ch.is_ascii_digit());
    let mut has_fraction = false;

    if scanner.peek() == Some('.') {
        scanner.read();
        value.push('.');
        has_fraction = true;
        has_digits |= read_digits(scanner, value, |ch| ch.is_ascii_digit());
    }

    (has_digits, has_fraction)
}

/// Reads characters accepted by `accept` into `value`.
///
/// Returns whether anything was read.
pub fn read_digits(scanner: &mut dyn Scanner, value: &mut String, accept: fn(char) -> bool) -> bool {
    let start = value.len();
    while let Some(ch) = scanner.peek()
          && accept(ch)
    {
        scanner.read();
        value.push(ch);
    }
    value.len() > start
}
