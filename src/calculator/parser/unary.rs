use crate::{
    calculator::{
        parser::{
            binary::parse_expression,
            core::{ParseResult, TokenStream},
        },
        token::{ExpressionToken, ExpressionTokenType as Kind},
    },
    error::SyntaxError,
    util::num::usize_to_i32_saturating,
    variant::Variant,
};

/// Parses a primary expression with an optional sign and index suffixes.
///
/// A leading `-` is emitted as `Unary` after the operand and its indexes, so
/// `-a[0]` negates the element. A leading `+` is dropped. Because the sign is
/// part of the primary, `-2 ^ 2` is `(-2) ^ 2`.
///
/// Grammar:
/// ```text
/// primary := ("+" | "-")? operand ("[" expression "]")*
/// operand := constant | "NULL" | variable | call | "(" expression ")"
/// ```
///
/// # Parameters
/// - `stream`: Token cursor positioned at the sign or the operand.
///
/// # Errors
/// - `UNEXPECTED_END` if the input ends before the operand.
/// - `ERROR_AT` if the token cannot start an operand.
/// - `MISSED_CLOSE_PARENTHESIS` and `MISSED_CLOSE_SQUARE_BRACKET` for
///   unclosed groups, calls and indexes.
pub fn parse_primary(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    let first = stream.expect_more()?;
    let sign = match first.kind {
        Kind::Plus => {
            stream.advance();
            None
        },
        Kind::Minus => {
            stream.advance();
            Some(first)
        },
        _ => None,
    };

    let token = stream.expect_more()?;
    match token.kind {
        Kind::Constant => {
            stream.advance();
            stream.emit(Kind::Constant, token.value.clone(), token.line, token.column);
        },
        Kind::Null => {
            stream.advance();
            stream.emit(Kind::Constant, Variant::Null, token.line, token.column);
        },
        Kind::Variable if stream.peek_kind(1) == Some(Kind::LeftBrace) => parse_call(stream, token)?,
        Kind::Variable => {
            stream.advance();
            stream.add_variable_name(token.name());
            stream.emit(Kind::Variable, token.value.clone(), token.line, token.column);
        },
        Kind::LeftBrace => {
            stream.advance();
            parse_expression(stream)?;
            expect_closing(stream, Kind::RightBrace)?;
        },
        _ => {
            return Err(SyntaxError::ErrorAt { token:  token.text(),
                                              line:   token.line,
                                              column: token.column, });
        },
    }

    parse_indexes(stream)?;

    if let Some(sign) = sign {
        stream.emit_operator(Kind::Unary, sign);
    }
    Ok(())
}

/// Parses a function call.
///
/// Emits the argument count as a constant, followed by the `Function` token
/// carrying the name. Empty arguments, as in `f(1,)`, are rejected.
///
/// # Parameters
/// - `stream`: Token cursor positioned at the function name.
/// - `name`: The function name token.
fn parse_call(stream: &mut TokenStream<'_>, name: &ExpressionToken) -> ParseResult<()> {
    stream.advance();
    stream.advance();

    let mut count = 0;
    if stream.peek_kind(0) != Some(Kind::RightBrace) {
        while stream.current().is_some() {
            parse_expression(stream)?;
            count += 1;
            if stream.peek_kind(0) != Some(Kind::Comma) {
                break;
            }
            stream.advance();
        }
    }
    expect_closing(stream, Kind::RightBrace)?;

    stream.emit(Kind::Constant,
                Variant::Integer(usize_to_i32_saturating(count)),
                name.line,
                name.column);
    stream.emit(Kind::Function, name.value.clone(), name.line, name.column);
    Ok(())
}

/// Parses any number of `[index]` suffixes.
fn parse_indexes(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    while let Some(open) = stream.current()
          && open.kind == Kind::LeftSquareBrace
    {
        stream.advance();
        parse_expression(stream)?;
        expect_closing(stream, Kind::RightSquareBrace)?;
        stream.emit_operator(Kind::Element, open);
    }
    Ok(())
}

/// Consumes the closing bracket of a group, call or index.
///
/// # Errors
/// A missing bracket is reported at the token found in its place, or at the
/// end of input.
fn expect_closing(stream: &mut TokenStream<'_>, kind: Kind) -> ParseResult<()> {
    let (line, column) = match stream.current() {
        Some(token) if token.kind == kind => {
            stream.advance();
            return Ok(());
        },
        Some(token) => (token.line, token.column),
        None => stream.end(),
    };

    if kind == Kind::RightSquareBrace {
        Err(SyntaxError::MissedCloseSquareBracket { line, column })
    } else {
        Err(SyntaxError::MissedCloseParenthesis { line, column })
    }
}
