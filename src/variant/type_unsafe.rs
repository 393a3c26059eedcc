use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    error::VariantError,
    util::num::{
        f64_to_f32_checked, f64_to_i64_truncated, i64_to_f64, i64_to_i32_checked,
    },
    variant::{OperationResult, Variant, VariantOperations, VariantType},
};

/// An operations strategy that converts between types whenever the result is
/// unambiguous.
///
/// - Every value converts to a string.
/// - Strings are parsed into numbers, booleans, date-times (RFC 3339 or
///   `YYYY-MM-DD`), and time spans (milliseconds).
/// - Numbers convert into each other. Narrowing truncates toward zero and
///   fails if the value does not fit.
/// - Numbers convert to booleans (non-zero is `true`), date-times
///   (milliseconds since the Unix epoch), and time spans (milliseconds).
/// - `Null` converts to the zero value of the target type.
///
/// # Example
/// ```
/// use formulary::variant::{TypeUnsafeVariantOperations, Variant, VariantOperations, VariantType};
///
/// let ops = TypeUnsafeVariantOperations;
///
/// assert_eq!(ops.convert(&"42".into(), VariantType::Integer).unwrap(), Variant::Integer(42));
/// assert_eq!(ops.convert(&Variant::Double(2.9), VariantType::Integer).unwrap(), Variant::Integer(2));
/// assert_eq!(ops.convert(&Variant::Integer(0), VariantType::Boolean).unwrap(), Variant::Boolean(false));
/// assert!(ops.convert(&"abc".into(), VariantType::Long).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeUnsafeVariantOperations;

impl VariantOperations for TypeUnsafeVariantOperations {
    fn convert(&self, value: &Variant, target: VariantType) -> OperationResult<Variant> {
        if value.variant_type() == target {
            return Ok(value.clone());
        }

        match target {
            VariantType::Null => Ok(Variant::Null),
            VariantType::Integer => {
                let long = to_long(value, target)?;
                i64_to_i32_checked(long, failed(value, target)).map(Variant::Integer)
            },
            VariantType::Long => to_long(value, target).map(Variant::Long),
            VariantType::Float => {
                let double = to_double(value, target)?;
                f64_to_f32_checked(double, failed(value, target)).map(Variant::Float)
            },
            VariantType::Double => to_double(value, target).map(Variant::Double),
            VariantType::String => Ok(Variant::String(to_text(value))),
            VariantType::Boolean => to_boolean(value, target).map(Variant::Boolean),
            VariantType::DateTime => to_date_time(value, target).map(Variant::DateTime),
            VariantType::TimeSpan => to_long(value, target).map(Variant::TimeSpan),
            VariantType::Array if value.is_null() => Ok(Variant::Array(Vec::new())),
            VariantType::Array | VariantType::Object => Err(unsupported(value, target)),
        }
    }
}

fn to_long(value: &Variant, target: VariantType) -> OperationResult<i64> {
    match value {
        Variant::Null => Ok(0),
        Variant::Integer(v) => Ok(i64::from(*v)),
        Variant::Long(v) | Variant::TimeSpan(v) => Ok(*v),
        Variant::Float(v) => f64_to_i64_truncated(f64::from(*v), failed(value, target)),
        Variant::Double(v) => f64_to_i64_truncated(*v, failed(value, target)),
        Variant::Boolean(v) => Ok(i64::from(*v)),
        Variant::DateTime(v) if target != VariantType::TimeSpan => Ok(v.timestamp_millis()),
        Variant::String(text) => {
            let text = text.trim();
            text.parse::<i64>().or_else(|_| {
                                   text.parse::<f64>()
                                       .ok()
                                       .filter(|v| v.fract() == 0.0)
                                       .ok_or_else(|| failed(value, target))
                                       .and_then(|v| f64_to_i64_truncated(v, failed(value, target)))
                               })
        },
        _ => Err(unsupported(value, target)),
    }
}

fn to_double(value: &Variant, target: VariantType) -> OperationResult<f64> {
    match value {
        Variant::Null => Ok(0.0),
        Variant::Integer(v) => Ok(f64::from(*v)),
        Variant::Long(v) | Variant::TimeSpan(v) => Ok(i64_to_f64(*v)),
        Variant::Float(v) => Ok(f64::from(*v)),
        Variant::Double(v) => Ok(*v),
        Variant::Boolean(v) => Ok(if *v { 1.0 } else { 0.0 }),
        Variant::DateTime(v) => Ok(i64_to_f64(v.timestamp_millis())),
        Variant::String(text) => text.trim()
                                     .parse::<f64>()
                                     .map_err(|_| failed(value, target)),
        _ => Err(unsupported(value, target)),
    }
}

fn to_boolean(value: &Variant, target: VariantType) -> OperationResult<bool> {
    match value {
        Variant::Null => Ok(false),
        Variant::Integer(v) => Ok(*v != 0),
        Variant::Long(v) | Variant::TimeSpan(v) => Ok(*v != 0),
        Variant::Float(v) => Ok(*v != 0.0),
        Variant::Double(v) => Ok(*v != 0.0),
        Variant::String(text) => match text.trim().to_lowercase().as_str() {
            "true" | "t" | "yes" | "y" | "on" | "1" => Ok(true),
            "false" | "f" | "no" | "n" | "off" | "0" => Ok(false),
            _ => Err(failed(value, target)),
        },
        _ => Err(unsupported(value, target)),
    }
}

fn to_date_time(value: &Variant, target: VariantType) -> OperationResult<DateTime<Utc>> {
    let from_millis = |millis: i64| DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| failed(value, target));

    match value {
        Variant::Null => Ok(DateTime::<Utc>::UNIX_EPOCH),
        Variant::Integer(v) => from_millis(i64::from(*v)),
        Variant::Long(v) => from_millis(*v),
        Variant::Float(_) | Variant::Double(_) => from_millis(to_long(value, target)?),
        Variant::String(text) => parse_date_time(text.trim()).ok_or_else(|| failed(value, target)),
        _ => Err(unsupported(value, target)),
    }
}

/// Parses an RFC 3339 timestamp or a plain `YYYY-MM-DD` date.
fn parse_date_time(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(time) = DateTime::parse_from_rfc3339(text) {
        return Some(time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
                                               .and_then(|date| date.and_hms_opt(0, 0, 0))
                                               .map(|time| time.and_utc())
}

fn to_text(value: &Variant) -> String {
    if value.is_null() { String::new() } else { value.to_string() }
}

fn failed(value: &Variant, to: VariantType) -> VariantError {
    VariantError::ConversionFailed { value: value.to_string(),
                                     to }
}

fn unsupported(value: &Variant, to: VariantType) -> VariantError {
    VariantError::UnsupportedConversion { from: value.variant_type(),
                                          to }
}
