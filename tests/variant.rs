use chrono::{DateTime, Utc};
use formulary::{
    error::VariantError,
    util::num::MAX_SAFE_I64_INT,
    variant::{TypeSafeVariantOperations, TypeUnsafeVariantOperations, Variant, VariantOperations, VariantType},
};
use pretty_assertions::assert_eq;

const LOOSE: TypeUnsafeVariantOperations = TypeUnsafeVariantOperations;
const STRICT: TypeSafeVariantOperations = TypeSafeVariantOperations;

fn time(text: &str) -> Variant {
    Variant::DateTime(DateTime::parse_from_rfc3339(text).unwrap().with_timezone(&Utc))
}

#[test]
fn loose_conversions() {
    let cases = [(Variant::from("42"), VariantType::Integer, Variant::Integer(42)),
                 (Variant::from(" 7.0 "), VariantType::Long, Variant::Long(7)),
                 (Variant::Double(-2.9), VariantType::Integer, Variant::Integer(-2)),
                 (Variant::Integer(3), VariantType::Double, Variant::Double(3.0)),
                 (Variant::from("yes"), VariantType::Boolean, Variant::Boolean(true)),
                 (Variant::Integer(0), VariantType::Boolean, Variant::Boolean(false)),
                 (Variant::Boolean(true), VariantType::Integer, Variant::Integer(1)),
                 (Variant::Double(1.5), VariantType::String, Variant::from("1.5")),
                 (Variant::Null, VariantType::Integer, Variant::Integer(0)),
                 (Variant::Null, VariantType::String, Variant::from("")),
                 (Variant::Null, VariantType::Array, Variant::Array(Vec::new())),
                 (Variant::Integer(1000), VariantType::DateTime, time("1970-01-01T00:00:01Z")),
                 (Variant::from("2024-02-29"), VariantType::DateTime, time("2024-02-29T00:00:00Z")),
                 (time("1970-01-01T00:00:02Z"), VariantType::Long, Variant::Long(2000)),
                 (Variant::Integer(90), VariantType::TimeSpan, Variant::TimeSpan(90))];

    for (value, target, expected) in cases {
        assert_eq!(LOOSE.convert(&value, target).unwrap(), expected, "{value} to {target}");
    }
}

#[test]
fn loose_conversions_that_fail() {
    let err = LOOSE.convert(&Variant::from("abc"), VariantType::Long).unwrap_err();
    assert_eq!(err.code(), "CONVERSION_FAILED");

    let err = LOOSE.convert(&Variant::Long(3_000_000_000), VariantType::Integer).unwrap_err();
    assert_eq!(err.code(), "CONVERSION_FAILED");

    let err = LOOSE.convert(&Variant::Array(Vec::new()), VariantType::Integer).unwrap_err();
    assert_eq!(err.code(), "UNSUPPORTED_CONVERSION");
}

#[test]
fn strict_conversions_only_widen() {
    assert_eq!(STRICT.convert(&Variant::Integer(7), VariantType::Long).unwrap(), Variant::Long(7));
    assert_eq!(STRICT.convert(&Variant::Float(0.5), VariantType::Double).unwrap(), Variant::Double(0.5));
    assert_eq!(STRICT.convert(&Variant::Null, VariantType::Integer).unwrap(), Variant::Null);

    let err = STRICT.convert(&Variant::Long(MAX_SAFE_I64_INT + 2), VariantType::Double).unwrap_err();
    assert_eq!(err.code(), "CONVERSION_FAILED");

    let err = STRICT.convert(&Variant::Double(1.0), VariantType::Integer).unwrap_err();
    assert_eq!(err,
               VariantError::UnsupportedConversion { from: VariantType::Double,
                                                     to:   VariantType::Integer, });
    assert!(STRICT.convert(&Variant::from("1"), VariantType::Integer).is_err());
}

#[test]
fn strict_float_conversions_must_be_exact() {
    assert_eq!(STRICT.convert(&Variant::Integer(16_777_216), VariantType::Float).unwrap(),
               Variant::Float(16_777_216.0));
    assert_eq!(STRICT.convert(&Variant::Long(-1 << 40), VariantType::Float).unwrap(),
               Variant::Float(-1_099_511_627_776.0));

    let err = STRICT.convert(&Variant::Integer(16_777_217), VariantType::Float).unwrap_err();
    assert_eq!(err.code(), "CONVERSION_FAILED");
    let err = STRICT.convert(&Variant::Long(MAX_SAFE_I64_INT), VariantType::Float).unwrap_err();
    assert_eq!(err.code(), "CONVERSION_FAILED");
    assert!(STRICT.convert(&Variant::Long(i64::MAX), VariantType::Float).is_err());
}

#[test]
fn arithmetic_widens_instead_of_wrapping() {
    assert_eq!(LOOSE.mul(&Variant::Integer(65_536), &Variant::Integer(65_536)).unwrap(),
               Variant::Long(4_294_967_296));
    assert_eq!(LOOSE.add(&Variant::Long(i64::MAX), &Variant::Long(1)).unwrap(),
               Variant::Double(9_223_372_036_854_775_808.0));
    assert_eq!(LOOSE.negative(&Variant::Integer(i32::MIN)).unwrap(),
               Variant::Long(2_147_483_648));
    assert_eq!(LOOSE.add(&Variant::Integer(1), &Variant::Double(0.5)).unwrap(), Variant::Double(1.5));
    assert_eq!(LOOSE.add(&Variant::Float(1.5), &Variant::Float(1.0)).unwrap(), Variant::Float(2.5));
    assert_eq!(LOOSE.sub(&Variant::Integer(1), &Variant::Long(3)).unwrap(), Variant::Long(-2));
}

#[test]
fn division_and_remainder() {
    assert_eq!(LOOSE.div(&Variant::Integer(-7), &Variant::Integer(2)).unwrap(), Variant::Integer(-3));
    assert_eq!(LOOSE.modulo(&Variant::Integer(-7), &Variant::Integer(2)).unwrap(), Variant::Integer(-1));
    assert_eq!(LOOSE.div(&Variant::Integer(1), &Variant::Integer(0)).unwrap_err(),
               VariantError::DivisionByZero);
    assert_eq!(LOOSE.div(&Variant::Double(1.0), &Variant::Double(0.0)).unwrap(),
               Variant::Double(f64::INFINITY));
}

#[test]
fn time_arithmetic() {
    let day = Variant::TimeSpan(86_400_000);
    let leap = time("2024-02-29T00:00:00Z");

    assert_eq!(LOOSE.add(&leap, &day).unwrap(), time("2024-03-01T00:00:00Z"));
    assert_eq!(LOOSE.add(&day, &leap).unwrap(), time("2024-03-01T00:00:00Z"));
    assert_eq!(LOOSE.sub(&leap, &day).unwrap(), time("2024-02-28T00:00:00Z"));
    assert_eq!(LOOSE.sub(&time("2024-03-01T00:00:00Z"), &leap).unwrap(), day);
    assert_eq!(LOOSE.add(&day, &Variant::TimeSpan(1)).unwrap(), Variant::TimeSpan(86_400_001));
    assert_eq!(LOOSE.negative(&day).unwrap(), Variant::TimeSpan(-86_400_000));
}

#[test]
fn logical_and_bitwise() {
    assert_eq!(LOOSE.and(&Variant::Boolean(true), &Variant::Boolean(false)).unwrap(),
               Variant::Boolean(false));
    assert_eq!(LOOSE.or(&Variant::Integer(5), &Variant::Integer(2)).unwrap(), Variant::Integer(7));
    assert_eq!(LOOSE.xor(&Variant::Long(6), &Variant::Integer(3)).unwrap(), Variant::Long(5));
    assert_eq!(LOOSE.not(&Variant::Integer(0)).unwrap(), Variant::Integer(-1));
    assert_eq!(LOOSE.and(&Variant::Null, &Variant::Boolean(true)).unwrap(), Variant::Null);
    assert_eq!(LOOSE.not(&Variant::from("x")).unwrap_err().code(), "UNSUPPORTED_OPERATION");
}

#[test]
fn shifts_reject_lossy_amounts() {
    assert_eq!(LOOSE.lsh(&Variant::Integer(1), &Variant::Integer(4)).unwrap(), Variant::Integer(16));
    assert_eq!(LOOSE.lsh(&Variant::Long(1), &Variant::Integer(40)).unwrap(), Variant::Long(1 << 40));
    assert_eq!(LOOSE.rsh(&Variant::Integer(-8), &Variant::Integer(1)).unwrap(), Variant::Integer(-4));
    assert_eq!(LOOSE.lsh(&Variant::Integer(1), &Variant::Integer(40)).unwrap_err().code(),
               "INVALID_ARGUMENT");
    assert_eq!(LOOSE.lsh(&Variant::Integer(1), &Variant::Integer(-1)).unwrap_err().code(),
               "INVALID_ARGUMENT");
}

#[test]
fn equality_across_types() {
    let eq = |a: Variant, b: Variant| LOOSE.equal(&a, &b).unwrap();

    assert_eq!(eq(Variant::Integer(1), Variant::Double(1.0)), Variant::Boolean(true));
    assert_eq!(eq(Variant::Integer(1), Variant::from("1.0")), Variant::Boolean(true));
    assert_eq!(eq(Variant::Null, Variant::Null), Variant::Boolean(true));
    assert_eq!(eq(Variant::Null, Variant::Integer(0)), Variant::Boolean(false));
    assert_eq!(eq(Variant::from("a"), Variant::from("A")), Variant::Boolean(false));
    assert_eq!(eq(Variant::Array(vec![1.into(), "2".into()]), Variant::Array(vec![1.into(), 2.into()])),
               Variant::Boolean(true));
    assert_eq!(eq(Variant::Array(Vec::new()), Variant::Integer(1)), Variant::Boolean(false));
    assert_eq!(LOOSE.not_equal(&Variant::Integer(1), &Variant::Integer(2)).unwrap(),
               Variant::Boolean(true));
}

#[test]
fn ordering() {
    assert_eq!(LOOSE.less(&Variant::from("abc"), &Variant::from("abd")).unwrap(), Variant::Boolean(true));
    assert_eq!(LOOSE.less(&Variant::from("ab"), &Variant::from("abc")).unwrap(), Variant::Boolean(true));
    assert_eq!(LOOSE.more(&Variant::Integer(10), &Variant::from("9")).unwrap(), Variant::Boolean(true));
    assert_eq!(LOOSE.more_equal(&Variant::Long(2), &Variant::Double(2.0)).unwrap(), Variant::Boolean(true));
    assert_eq!(LOOSE.less_equal(&Variant::Null, &Variant::Integer(1)).unwrap(), Variant::Null);
    assert_eq!(LOOSE.less(&time("2024-01-01T00:00:00Z"), &time("2024-01-02T00:00:00Z")).unwrap(),
               Variant::Boolean(true));
    assert_eq!(LOOSE.less(&Variant::Double(f64::NAN), &Variant::Double(1.0)).unwrap(),
               Variant::Boolean(false));
}

#[test]
fn strict_operators_reject_mixed_types() {
    assert_eq!(STRICT.add(&Variant::from("a"), &Variant::Integer(1)).unwrap_err().code(),
               "UNSUPPORTED_OPERATION");
    assert_eq!(STRICT.equal(&Variant::from("1"), &Variant::Integer(1)).unwrap(), Variant::Boolean(false));
    assert_eq!(STRICT.add(&Variant::Integer(1), &Variant::Long(2)).unwrap(), Variant::Long(3));
}

#[test]
fn elements_of_arrays_and_strings() {
    let items = Variant::Array(vec![10.into(), 20.into()]);

    assert_eq!(LOOSE.get_element(&items, &Variant::Integer(1)).unwrap(), Variant::Integer(20));
    assert_eq!(LOOSE.get_element(&items, &Variant::from("0")).unwrap(), Variant::Integer(10));
    assert_eq!(LOOSE.get_element(&Variant::from("héllo"), &Variant::Integer(1)).unwrap(),
               Variant::from("é"));
    assert_eq!(LOOSE.get_element(&Variant::Null, &Variant::Integer(3)).unwrap(), Variant::Null);
    assert_eq!(LOOSE.get_element(&items, &Variant::Integer(2)).unwrap_err(),
               VariantError::IndexOutOfRange { index:  2,
                                               length: 2, });
    assert_eq!(LOOSE.get_element(&items, &Variant::Integer(-1)).unwrap_err().code(),
               "INDEX_OUT_OF_RANGE");
    assert_eq!(LOOSE.get_element(&Variant::Integer(5), &Variant::Integer(0)).unwrap_err().code(),
               "UNSUPPORTED_OPERATION");
}

#[test]
fn display_and_accessors() {
    assert_eq!(Variant::Null.to_string(), "null");
    assert_eq!(Variant::Array(vec![1.into(), "a".into()]).to_string(), "[1, a]");
    assert_eq!(time("2024-02-29T12:00:00Z").to_string(), "2024-02-29T12:00:00.000Z");
    assert_eq!(Variant::Integer(4).as_integer(), Some(4));
    assert_eq!(Variant::from("x").as_str(), Some("x"));
    assert_eq!(Variant::Long(4).as_integer(), None);
    assert!(Variant::Double(1.0).is_numeric());
    assert!(!Variant::from("1").is_numeric());
}

#[test]
fn objects_hold_arbitrary_values() {
    let value = Variant::from_object(vec![1_u8, 2, 3]);

    assert_eq!(value.variant_type(), VariantType::Object);
    assert_eq!(value.as_object::<Vec<u8>>(), Some(&vec![1, 2, 3]));
    assert_eq!(value.as_object::<String>(), None);
}
