use formulary::{
    calculator::{
        ExpressionParser, ExpressionToken,
        ExpressionTokenType::{self, *},
    },
    error::SyntaxError,
    tokenizer::{Token, TokenType},
    variant::Variant,
};
use pretty_assertions::assert_eq;

fn parse(src: &str) -> ExpressionParser {
    let mut parser = ExpressionParser::new();
    parser.parse_string(src)
          .unwrap_or_else(|e| panic!("'{src}' failed to parse: {e}"));
    parser
}

fn kinds(src: &str) -> Vec<ExpressionTokenType> {
    parse(src).result_tokens().iter().map(|t| t.kind).collect()
}

fn rendered(src: &str) -> Vec<String> {
    parse(src).result_tokens().iter().map(ToString::to_string).collect()
}

fn syntax_error(src: &str) -> SyntaxError {
    let mut parser = ExpressionParser::new();
    match parser.parse_string(src) {
        Ok(()) => panic!("'{src}' parsed but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn result_tokens_are_in_postfix_order() {
    assert_eq!(kinds("2 + 3 * 4"), vec![Constant, Constant, Constant, Star, Plus]);
    assert_eq!(kinds("(2 + 3) * 4"), vec![Constant, Constant, Plus, Constant, Star]);
    assert_eq!(kinds("a AND b = c"), vec![Variable, Variable, Variable, Equal, And]);
}

#[test]
fn calls_push_their_argument_count() {
    assert_eq!(rendered("Max(1, 2.5)"),
               vec!["Constant(1)", "Constant(2.5)", "Constant(2)", "Function(Max)"]);
    assert_eq!(rendered("Now()"), vec!["Constant(0)", "Function(Now)"]);
}

#[test]
fn sign_applies_after_indexes() {
    assert_eq!(kinds("-a[0]"), vec![Variable, Constant, Element, Unary]);
    assert_eq!(kinds("a[0][1]"), vec![Variable, Constant, Element, Constant, Element]);
    assert_eq!(kinds("+a"), vec![Variable]);
}

#[test]
fn keyword_pairs_become_single_operators() {
    assert_eq!(kinds("a IS NULL"), vec![Variable, IsNull]);
    assert_eq!(kinds("a is not null"), vec![Variable, IsNotNull]);
    assert_eq!(kinds("a NOT LIKE 'x%'"), vec![Variable, Constant, NotLike]);
    assert_eq!(kinds("a NOT IN b"), vec![Variable, Variable, NotIn]);
    assert_eq!(kinds("NOT a"), vec![Variable, Not]);
    assert_eq!(kinds("NULL"), vec![Constant]);
}

#[test]
fn literals_map_to_constants() {
    let parser = parse("TRUE + 0x10 + 1.5e1 + 'x'");
    let constants: Vec<&Variant> = parser.result_tokens()
                                         .iter()
                                         .filter(|t| t.kind == Constant)
                                         .map(|t| &t.value)
                                         .collect();

    assert_eq!(constants,
               vec![&Variant::Boolean(true),
                    &Variant::Integer(16),
                    &Variant::Double(15.0),
                    &Variant::from("x")]);
}

#[test]
fn variable_names_are_distinct_and_ordered() {
    let parser = parse("b + a * b + \"my var\" + F(c)");
    assert_eq!(parser.variable_names(), ["b", "a", "my var", "c"]);
}

#[test]
fn tokens_keep_source_positions() {
    let parser = parse("1 +\n  x");
    let positions: Vec<(ExpressionTokenType, usize, usize)> =
        parser.result_tokens().iter().map(|t| (t.kind, t.line, t.column)).collect();

    assert_eq!(positions, vec![(Constant, 1, 1), (Variable, 2, 3), (Plus, 1, 3)]);
}

#[test]
fn initial_tokens_follow_the_source() {
    let parser = parse("a + 1");
    let initial: Vec<&ExpressionToken> = parser.initial_tokens().iter().collect();

    assert_eq!(initial.len(), 3);
    assert_eq!(initial[1].kind, Plus);
    assert_eq!(parser.original_tokens().last().map(|t| t.kind), Some(TokenType::Eof));
}

#[test]
fn parses_tokens_from_another_tokenizer() {
    let tokens = vec![Token::new(TokenType::Word, "x", 1, 1),
                      Token::new(TokenType::Symbol, "*", 1, 2),
                      Token::new(TokenType::Integer, "2", 1, 3)];

    let mut parser = ExpressionParser::new();
    parser.parse_tokens(&tokens).unwrap();

    assert_eq!(parser.expression(), "x*2");
    assert_eq!(parser.result_tokens().iter().map(|t| t.kind).collect::<Vec<_>>(),
               vec![Variable, Constant, Star]);
}

#[test]
fn reports_syntax_errors_with_positions() {
    let cases = [("1 +", "UNEXPECTED_END", 1, 4),
                 ("2 + (3 * 4", "MISSED_CLOSE_PARENTHESIS", 1, 11),
                 ("a[1", "MISSED_CLOSE_SQUARE_BRACKET", 1, 4),
                 ("Max(1,)", "ERROR_AT", 1, 7),
                 ("1 2", "ERROR_NEAR", 1, 3),
                 ("a & b", "UNKNOWN_SYMBOL", 1, 3),
                 ("* 2", "ERROR_AT", 1, 1),
                 ("0x", "ERROR_NEAR", 1, 2)];

    for (src, code, line, column) in cases {
        let err = syntax_error(src);
        assert_eq!((src, err.code(), err.line(), err.column()), (src, code, line, column));
    }
}

#[test]
fn rejects_deep_nesting() {
    let deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert_eq!(syntax_error(&deep).code(), "NESTING_TOO_DEEP");

    let negations = format!("{}true", "NOT ".repeat(300));
    assert_eq!(syntax_error(&negations).code(), "NESTING_TOO_DEEP");

    let fine = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(kinds(&fine), vec![Constant]);
}

#[test]
fn hex_literals_out_of_range_are_unknown() {
    assert_eq!(syntax_error("0x1FFFFFFFFFFFFFFFF").code(), "UNKNOWN_SYMBOL");
}
