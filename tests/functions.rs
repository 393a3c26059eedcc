use formulary::{
    calculator::{
        Calculator, Function, FunctionCollection,
        function::{Arity, BUILTIN_FUNCTIONS, DelegatedFunction, aggregate, date, math, misc},
    },
    error::{CalculationError, ExpressionError, FunctionError},
    evaluate,
    variant::{TypeUnsafeVariantOperations, Variant, VariantType},
};
use pretty_assertions::assert_eq;

fn value(src: &str) -> Variant {
    evaluate(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

fn error_code(src: &str) -> &'static str {
    match evaluate(src) {
        Ok(v) => panic!("'{src}' succeeded with {v} but was expected to fail"),
        Err(e) => e.code(),
    }
}

#[test]
fn math_functions() {
    assert_eq!(value("Abs(-5)"), Variant::Integer(5));
    assert_eq!(value("Abs(-2.5)"), Variant::Double(2.5));
    assert_eq!(value("Sqr(3)"), Variant::Double(9.0));
    assert_eq!(value("Sqrt(16)"), Variant::Double(4.0));
    assert_eq!(value("Round(2.5)"), Variant::Double(3.0));
    assert_eq!(value("Ceiling(1.2)"), Variant::Double(2.0));
    assert_eq!(value("Floor(-1.2)"), Variant::Double(-2.0));
    assert_eq!(value("Trunc(-2.7)"), Variant::Integer(-2));
    assert_eq!(value("Truncate(5000000000.5)"), Variant::Long(5_000_000_000));
    assert_eq!(value("Ln(1)"), Variant::Double(0.0));
    assert_eq!(value("Log10(100)"), Variant::Double(2.0));
    assert_eq!(value("Cos(0)"), Variant::Double(1.0));
    assert_eq!(value("Pi()"), Variant::Double(std::f64::consts::PI));
}

#[test]
fn random_stays_in_the_unit_interval() {
    for _ in 0..100 {
        let Variant::Double(x) = value("Rnd()") else {
            panic!("Rnd() must return a Double");
        };
        assert!((0.0..1.0).contains(&x));
    }
}

#[test]
fn aggregate_functions() {
    assert_eq!(value("Min(3, 1, 2)"), Variant::Integer(1));
    assert_eq!(value("Max(1, 2.5)"), Variant::Double(2.5));
    assert_eq!(value("Max('a', 'b')"), Variant::from("b"));
    assert_eq!(value("Sum(1, 2, 3)"), Variant::Integer(6));
    assert_eq!(value("If(1 > 2, 'yes', 'no')"), Variant::from("no"));
    assert_eq!(value("Choose(2, 'a', 'b', 'c')"), Variant::from("b"));
    assert_eq!(error_code("Choose(4, 'a', 'b', 'c')"), "INVALID_ARGUMENT");
    assert_eq!(error_code("Choose(0, 'a', 'b')"), "INVALID_ARGUMENT");
}

#[test]
fn date_functions() {
    assert_eq!(value("Year(Date(2024, 2, 29))"), Variant::Integer(2024));
    assert_eq!(value("Month(Date(2024, 2, 29))"), Variant::Integer(2));
    assert_eq!(value("Day(Date(2024, 2, 29))"), Variant::Integer(29));
    assert_eq!(value("DayOfWeek(Date(2024, 2, 29))"), Variant::Integer(4));
    assert_eq!(value("Hour(Date(2024, 1, 1, 10, 30, 15))"), Variant::Integer(10));
    assert_eq!(value("Minute(Date(2024, 1, 1, 10, 30, 15))"), Variant::Integer(30));
    assert_eq!(value("Second(Date(2024, 1, 1, 10, 30, 15))"), Variant::Integer(15));
    assert_eq!(value("Date(0)").to_string(), "1970-01-01T00:00:00.000Z");
    assert_eq!(error_code("Date(2023, 2, 29)"), "INVALID_ARGUMENT");
}

#[test]
fn time_spans_and_date_arithmetic() {
    assert_eq!(value("TimeSpan(1500)"), Variant::TimeSpan(1500));
    assert_eq!(value("TimeSpan(1, 2, 3)"), Variant::TimeSpan(3_723_000));
    assert_eq!(value("TimeSpan(1, 0, 0, 0, 5)"), Variant::TimeSpan(86_400_005));
    assert_eq!(value("Date(2024, 3, 1) - Date(2024, 2, 29)"), Variant::TimeSpan(86_400_000));
    assert_eq!(value("Date(2024, 2, 29) + TimeSpan(1, 0, 0, 0) = Date(2024, 3, 1)"),
               Variant::Boolean(true));
    assert_eq!(error_code("TimeSpan(1, 2)"), "WRONG_PARAM_COUNT");
}

#[test]
fn clock_functions_return_current_values() {
    assert_eq!(value("Now()").variant_type(), VariantType::DateTime);
    assert!(matches!(value("Ticks()"), Variant::Long(ms) if ms > 0));
}

#[test]
fn misc_functions() {
    assert_eq!(value("Empty('')"), Variant::Boolean(true));
    assert_eq!(value("Empty(NULL)"), Variant::Boolean(true));
    assert_eq!(value("Empty(0)"), Variant::Boolean(false));
    assert_eq!(value("Contains('hello', 'ell')"), Variant::Boolean(true));
    assert_eq!(value("Contains(Array(1, 2), 2)"), Variant::Boolean(true));
    assert_eq!(value("Contains(NULL, 1)"), Variant::Boolean(false));
    assert_eq!(value("Array(1, 'a')"), Variant::Array(vec![Variant::Integer(1), Variant::from("a")]));
    assert_eq!(value("Array()"), Variant::Array(Vec::new()));
}

#[test]
fn names_ignore_case() {
    assert_eq!(value("max(1, 2) + MAX(3, 4) + mAx(5, 6)"), Variant::Integer(12));
}

#[test]
fn arity_is_checked_before_calling() {
    assert_eq!(error_code("Abs()"), "WRONG_PARAM_COUNT");
    assert_eq!(error_code("Min(1)"), "WRONG_PARAM_COUNT");
    assert_eq!(error_code("Date(1, 2, 3, 4, 5, 6, 7, 8)"), "WRONG_PARAM_COUNT");
}

#[test]
fn wrong_arity_reports_expected_and_actual() {
    match evaluate("Pi(1)") {
        Err(ExpressionError::Calculation(CalculationError::Function { source, column, .. })) => {
            assert_eq!(source,
                       FunctionError::WrongParamCount { expected: "0".to_string(),
                                                        actual:   1, });
            assert_eq!(column, 1);
        },
        other => panic!("expected a function error, got {other:?}"),
    }
}

#[test]
fn arguments_are_evaluated_before_the_call() {
    assert_eq!(error_code("If(true, 1, Undefined())"), "FUNC_NOT_FOUND");
    assert_eq!(error_code("If(true, 1, 1 / 0)"), "DIVISION_BY_ZERO");
}

#[test]
fn every_builtin_is_registered() {
    let functions = FunctionCollection::with_defaults();

    assert_eq!(functions.len(), BUILTIN_FUNCTIONS.len());
    for name in BUILTIN_FUNCTIONS {
        assert!(functions.find_by_name(&name.to_uppercase()).is_some(), "{name} is missing");
    }
}

#[test]
fn custom_functions_are_called_with_arguments_in_order() {
    let mut calculator = Calculator::new();
    calculator.default_functions_mut()
              .add(DelegatedFunction::new("Join", Arity::AtLeast(1), |args, _ops| {
                  Ok(Variant::String(args.iter().map(ToString::to_string).collect::<Vec<_>>().join("-")))
              }));
    calculator.set_expression("Join(1, 'b', 2 + 1)").unwrap();

    assert_eq!(calculator.evaluate().unwrap(), Variant::from("1-b-3"));
}

#[test]
fn delegated_functions_can_be_called_directly() {
    let function = DelegatedFunction::new("Half", Arity::Exact(1), |args, ops| {
        Ok(ops.div(&args[0], &Variant::Double(2.0))?)
    });

    assert_eq!(function.name(), "Half");
    assert_eq!(function.calculate(&[Variant::Integer(3)], &TypeUnsafeVariantOperations).unwrap(),
               Variant::Double(1.5));
    assert_eq!(function.calculate(&[], &TypeUnsafeVariantOperations).unwrap_err().code(),
               "WRONG_PARAM_COUNT");
}

#[test]
fn builtins_check_their_own_argument_count() {
    let ops = TypeUnsafeVariantOperations;
    let wrong_count = |result: Result<Variant, FunctionError>| match result {
        Err(FunctionError::WrongParamCount { expected, actual }) => (expected, actual),
        other => panic!("expected a wrong parameter count, got {other:?}"),
    };

    assert_eq!(wrong_count(math::sqrt(&[], &ops)), ("1".to_string(), 0));
    assert_eq!(wrong_count(math::pi(&[Variant::Integer(1)], &ops)), ("0".to_string(), 1));
    assert_eq!(wrong_count(aggregate::if_(&[Variant::Boolean(true)], &ops)), ("3".to_string(), 1));
    assert_eq!(wrong_count(aggregate::choose(&[Variant::Integer(1)], &ops)),
               ("at least 3".to_string(), 1));
    assert_eq!(wrong_count(misc::contains(&["abc".into()], &ops)), ("2".to_string(), 1));
    assert_eq!(wrong_count(date::year(&[], &ops)), ("1".to_string(), 0));
    assert_eq!(wrong_count(date::time_span(&[Variant::Integer(1), Variant::Integer(2)], &ops)),
               ("1, 3, 4 or 5".to_string(), 2));
}
