use crate::calculator::{
    parser::{
        core::{ParseResult, TokenStream},
        unary::parse_primary,
    },
    token::ExpressionTokenType as Kind,
};

/// Parses a complete expression.
///
/// This is the entry point of the syntax pass and the lowest precedence
/// level. Groups, call arguments and indexes re-enter here, so this is also
/// where nesting depth is counted.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `stream`: Token cursor positioned at the first token of the expression.
///
/// # Errors
/// - `UNEXPECTED_END` if no tokens are left.
/// - `NESTING_TOO_DEEP` if too many constructs are open.
/// - Any error of the levels below.
pub fn parse_expression(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    let first = stream.expect_more()?;
    stream.enter(first)?;
    let result = parse_logical(stream);
    stream.leave();
    result
}

/// Parses `AND`, `OR` and `XOR`, left to right with equal precedence.
///
/// Grammar: `logical := not (("AND" | "OR" | "XOR") not)*`
pub fn parse_logical(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    parse_not(stream)?;
    while let Some(token) = stream.current()
          && matches!(token.kind, Kind::And | Kind::Or | Kind::Xor)
    {
        stream.advance();
        parse_not(stream)?;
        stream.emit_operator(token.kind, token);
    }
    Ok(())
}

/// Parses a prefix `NOT`.
///
/// Grammar: `not := "NOT" not | comparison`
pub fn parse_not(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    let token = stream.expect_more()?;
    if token.kind != Kind::Not {
        return parse_comparison(stream);
    }

    stream.advance();
    stream.enter(token)?;
    let result = parse_not(stream);
    stream.leave();
    result?;
    stream.emit_operator(Kind::Not, token);
    Ok(())
}

/// Parses the comparison operators.
///
/// Grammar: `comparison := additive (("=" | "<>" | ">" | "<" | ">=" | "<=") additive)*`
pub fn parse_comparison(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    parse_additive(stream)?;
    while let Some(token) = stream.current()
          && matches!(token.kind,
                      Kind::Equal
                      | Kind::NotEqual
                      | Kind::More
                      | Kind::Less
                      | Kind::EqualMore
                      | Kind::EqualLess)
    {
        stream.advance();
        parse_additive(stream)?;
        stream.emit_operator(token.kind, token);
    }
    Ok(())
}

/// Parses addition, subtraction, and the pattern and null tests.
///
/// `IS NULL` and `IS NOT NULL` are postfix. `NOT LIKE` and `NOT IN` are
/// binary operators spelled with two keywords.
///
/// Grammar:
/// ```text
/// additive := multiplicative (("+" | "-" | "LIKE" | "NOT" "LIKE" | "NOT" "IN") multiplicative
///                             | "IS" "NULL" | "IS" "NOT" "NULL")*
/// ```
pub fn parse_additive(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    parse_multiplicative(stream)?;
    while let Some(token) = stream.current() {
        if matches!(token.kind, Kind::Plus | Kind::Minus | Kind::Like) {
            stream.advance();
            parse_multiplicative(stream)?;
            stream.emit_operator(token.kind, token);
        } else if stream.match_kinds(&[Kind::Not, Kind::Like]) {
            parse_multiplicative(stream)?;
            stream.emit_operator(Kind::NotLike, token);
        } else if stream.match_kinds(&[Kind::Is, Kind::Null]) {
            stream.emit_operator(Kind::IsNull, token);
        } else if stream.match_kinds(&[Kind::Is, Kind::Not, Kind::Null]) {
            stream.emit_operator(Kind::IsNotNull, token);
        } else if stream.match_kinds(&[Kind::Not, Kind::In]) {
            parse_multiplicative(stream)?;
            stream.emit_operator(Kind::NotIn, token);
        } else {
            break;
        }
    }
    Ok(())
}

/// Parses multiplication, division and remainder.
///
/// Grammar: `multiplicative := power (("*" | "/" | "%") power)*`
pub fn parse_multiplicative(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    parse_power(stream)?;
    while let Some(token) = stream.current()
          && matches!(token.kind, Kind::Star | Kind::Slash | Kind::Percent)
    {
        stream.advance();
        parse_power(stream)?;
        stream.emit_operator(token.kind, token);
    }
    Ok(())
}

/// Parses powers, membership and shifts.
///
/// All four operators are left-associative: `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
///
/// Grammar: `power := primary (("^" | "IN" | "<<" | ">>") primary)*`
pub fn parse_power(stream: &mut TokenStream<'_>) -> ParseResult<()> {
    parse_primary(stream)?;
    while let Some(token) = stream.current()
          && matches!(token.kind, Kind::Power | Kind::In | Kind::ShiftLeft | Kind::ShiftRight)
    {
        stream.advance();
        parse_primary(stream)?;
        stream.emit_operator(token.kind, token);
    }
    Ok(())
}
