use formulary::{
    calculator::{Calculator, ExpressionParser, evaluator::operator::like_matches},
    evaluate,
    tokenizer::{TokenType, Tokenizer},
    variant::Variant,
};
use proptest::prelude::*;

fn as_i64(value: &Variant) -> Option<i64> {
    match value {
        Variant::Integer(v) => Some(i64::from(*v)),
        Variant::Long(v) => Some(*v),
        _ => None,
    }
}

/// Builds well formed arithmetic over small integers and two variables.
fn arithmetic() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0..100_i32).prop_map(|n| n.to_string()),
                           Just("a".to_string()),
                           Just("b".to_string())];
    leaf.prop_recursive(3, 16, 2, |inner| {
            (inner.clone(), prop_oneof![Just("+"), Just("-"), Just("*"), Just("%")], inner)
                .prop_map(|(l, op, r)| format!("({l} {op} {r})"))
        })
}

proptest! {
    #[test]
    fn valid_expressions_leave_one_value(source in arithmetic(), a in 1..100_i32, b in 1..100_i32) {
        let mut calculator = Calculator::with_expression(&source).unwrap();
        calculator.default_variables_mut().locate("a").set_value(a);
        calculator.default_variables_mut().locate("b").set_value(b);

        let first = calculator.evaluate();
        let second = calculator.evaluate();
        prop_assert_eq!(&first, &second);
        if let Err(e) = first {
            prop_assert_eq!(e.code(), "DIVISION_BY_ZERO");
        }
    }

    #[test]
    fn tokens_cover_the_whole_input(source in "[ -~\n]{0,40}") {
        let tokens = Tokenizer::expression().tokenize(&source);
        let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();

        prop_assert_eq!(joined, source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenType::Eof));
    }

    #[test]
    fn parsing_and_evaluating_never_panic(source in "[ -~]{0,40}") {
        let mut parser = ExpressionParser::new();
        if parser.parse_string(&source).is_ok() {
            let _ = evaluate(&source);
        } else {
            prop_assert!(parser.result_tokens().is_empty());
        }
    }

    #[test]
    fn integer_sums_never_wrap(a in any::<i32>(), b in any::<i32>()) {
        let result = evaluate(&format!("{a} + {b}")).unwrap();
        prop_assert_eq!(as_i64(&result), Some(i64::from(a) + i64::from(b)));
    }

    #[test]
    fn integer_products_never_wrap(a in any::<i32>(), b in any::<i32>()) {
        let result = evaluate(&format!("{a} * ({b})")).unwrap();
        prop_assert_eq!(as_i64(&result), Some(i64::from(a) * i64::from(b)));
    }

    #[test]
    fn comparisons_agree_with_integers(a in any::<i32>(), b in any::<i32>()) {
        let result = evaluate(&format!("{a} < {b}")).unwrap();
        prop_assert_eq!(result, Variant::Boolean(a < b));
    }

    #[test]
    fn literal_patterns_match_themselves(text in "[a-zA-Z0-9 ]{0,20}") {
        prop_assert!(like_matches(&text, &text));
        prop_assert!(like_matches(&text.to_uppercase(), &text));
        prop_assert!(like_matches(&text, "%"));
    }
}
