use crate::{
    calculator::{
        parser::core::ParseResult,
        token::{ExpressionToken, ExpressionTokenType},
    },
    error::SyntaxError,
    tokenizer::{Token, TokenType},
    variant::Variant,
};

/// Maps raw tokens to expression tokens.
///
/// Whitespace, comments and the end-of-input marker are dropped.
///
/// # Parameters
/// - `tokens`: Raw tokens from the expression tokenizer, strings decoded.
///
/// # Returns
/// The expression tokens in source order.
///
/// # Errors
/// `UNKNOWN_SYMBOL` for a token that has no meaning in an expression, such as
/// `&` or a number literal that is out of range.
pub fn complete_lexical_analysis(tokens: &[Token]) -> ParseResult<Vec<ExpressionToken>> {
    let mut result = Vec::with_capacity(tokens.len());

    for token in tokens {
        let mapped = match token.kind {
            TokenType::Whitespace | TokenType::Comment | TokenType::Eof => continue,
            TokenType::Keyword => map_keyword(&token.value),
            TokenType::Word => Some((ExpressionTokenType::Variable, Variant::String(token.value.clone()))),
            TokenType::Integer => parse_integer(&token.value).map(constant),
            TokenType::HexDecimal => parse_hex(&token.value).map(constant),
            TokenType::Float => token.value.parse::<f64>().ok().map(|v| constant(Variant::Double(v))),
            TokenType::Quoted => Some(constant(Variant::String(token.value.clone()))),
            TokenType::Symbol => ExpressionTokenType::from_operator(&token.value).map(|kind| (kind, Variant::Null)),
            _ => None,
        };

        let Some((kind, value)) = mapped else {
            return Err(SyntaxError::UnknownSymbol { symbol: token.value.clone(),
                                                    line:   token.line,
                                                    column: token.column, });
        };
        result.push(ExpressionToken::new(kind, value, token.line, token.column));
    }

    Ok(result)
}

const fn constant(value: Variant) -> (ExpressionTokenType, Variant) {
    (ExpressionTokenType::Constant, value)
}

fn map_keyword(text: &str) -> Option<(ExpressionTokenType, Variant)> {
    if text.eq_ignore_ascii_case("TRUE") {
        Some(constant(Variant::Boolean(true)))
    } else if text.eq_ignore_ascii_case("FALSE") {
        Some(constant(Variant::Boolean(false)))
    } else {
        ExpressionTokenType::from_operator(text).map(|kind| (kind, Variant::Null))
    }
}

/// Parses a decimal literal into the narrowest type that holds it.
///
/// Literals beyond `i64` become `Double`.
fn parse_integer(text: &str) -> Option<Variant> {
    if let Ok(value) = text.parse::<i32>() {
        return Some(Variant::Integer(value));
    }
    if let Ok(value) = text.parse::<i64>() {
        return Some(Variant::Long(value));
    }
    text.parse::<f64>().ok().map(Variant::Double)
}

/// Parses a `0x` literal into an `Integer` or a `Long`.
fn parse_hex(text: &str) -> Option<Variant> {
    let digits = text.get(2..)?;
    let value = i64::from_str_radix(digits, 16).ok()?;
    Some(i32::try_from(value).map_or(Variant::Long(value), Variant::Integer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_literals_widen() {
        assert_eq!(parse_integer("7"), Some(Variant::Integer(7)));
        assert_eq!(parse_integer("3000000000"), Some(Variant::Long(3_000_000_000)));
        assert_eq!(parse_integer("99999999999999999999"), Some(Variant::Double(1e20)));
    }

    #[test]
    fn hex_literals() {
        assert_eq!(parse_hex("0xff"), Some(Variant::Integer(255)));
        assert_eq!(parse_hex("0x100000000"), Some(Variant::Long(0x1_0000_0000)));
        assert_eq!(parse_hex("0x"), None);
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let tokens = [Token::new(TokenType::Symbol, "&", 1, 3)];
        let err = complete_lexical_analysis(&tokens).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_SYMBOL");
        assert_eq!((err.line(), err.column()), (1, 3));
    }
}
