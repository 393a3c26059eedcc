use crate::{
    io::scanner::Scanner,
    tokenizer::{QuoteState, Token, TokenType, Tokenizer, TokenizerState},
};

/// Reads a string enclosed in a pair of identical quote characters.
///
/// There is no escape mechanism: the string ends at the next occurrence of
/// the opening quote, or at the end of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericQuoteState;

impl TokenizerState for GenericQuoteState {
    fn next_token(&self, scanner: &mut dyn Scanner, _tokenizer: &Tokenizer) -> Token {
        let (line, column) = (scanner.peek_line(), scanner.peek_column());
        let Some(quote) = scanner.read() else {
            return Token::new(TokenType::Quoted, "", line, column);
        };

        let mut value = String::from(quote);
        while let Some(ch) = scanner.read() {
            value.push(ch);
            if ch == quote {
                break;
            }
        }

        Token::new(TokenType::Quoted, value, line, column)
    }
}

impl QuoteState for GenericQuoteState {
    fn encode_string(&self, value: &str, quote: char) -> String {
        format!("{quote}{value}{quote}")
    }

    fn decode_string(&self, value: &str, quote: char) -> String {
        strip_quotes(value, quote).unwrap_or(value).to_string()
    }
}

/// Reads a quoted string in which a doubled quote stands for one quote.
///
/// The returned text keeps the surrounding quotes and the doubled escapes.
pub fn read_escaped_quoted(scanner: &mut dyn Scanner) -> String {
    let Some(quote) = scanner.read() else {
        return String::new();
    };

    let mut value = String::from(quote);
    while let Some(ch) = scanner.read() {
        value.push(ch);
        if ch == quote {
            if scanner.peek() == Some(quote) {
                scanner.read();
                value.push(quote);
            } else {
                break;
            }
        }
    }
    value
}

/// Wraps `value` in `quote`, doubling every quote inside.
#[must_use]
pub fn encode_escaped(value: &str, quote: char) -> String {
    let doubled = format!("{quote}{quote}");
    format!("{quote}{}{quote}", value.replace(quote, &doubled))
}

/// Strips `quote` from both ends of `value` and collapses doubled quotes.
///
/// Values that are not wrapped in `quote` are returned unchanged.
#[must_use]
pub fn decode_escaped(value: &str, quote: char) -> String {
    strip_quotes(value, quote).map_or_else(|| value.to_string(), |inner| {
                                  let doubled = format!("{quote}{quote}");
                                  inner.replace(&doubled, &quote.to_string())
                              })
}

/// Returns the text between the quotes, if `value` is wrapped in `quote`.
fn strip_quotes(value: &str, quote: char) -> Option<&str> {
    value.strip_prefix(quote)?.strip_suffix(quote)
}
