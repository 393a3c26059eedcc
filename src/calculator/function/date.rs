use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::{
    calculator::function::core::{Arity, FunctionResult, invalid_argument, to_date_time, to_integer, to_long},
    variant::{Variant, VariantOperations},
};

/// Returns the current time as milliseconds since the Unix epoch.
pub fn ticks(args: &[Variant], _ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(0).check(args.len())?;
    Ok(Variant::Long(Utc::now().timestamp_millis()))
}

/// Returns the current UTC date and time.
pub fn now(args: &[Variant], _ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(0).check(args.len())?;
    Ok(Variant::DateTime(Utc::now()))
}

/// Builds a time span.
///
/// Accepts milliseconds, `(hours, minutes, seconds)`,
/// `(days, hours, minutes, seconds)`, or
/// `(days, hours, minutes, seconds, milliseconds)`.
///
/// # Errors
/// `INVALID_ARGUMENT` if the span overflows.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::function::date::time_span,
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let ops = TypeUnsafeVariantOperations;
/// let span = time_span(&[1.into(), 2.into(), 3.into()], &ops).unwrap();
/// assert_eq!(span, Variant::TimeSpan(3_723_000));
/// ```
pub fn time_span(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::OneOf(&[1, 3, 4, 5]).check(args.len())?;
    let parts = args.iter()
                    .map(|arg| to_long(arg, ops))
                    .collect::<FunctionResult<Vec<_>>>()?;

    let millis = match parts.as_slice() {
        [millis] => Some(*millis),
        [hours, minutes, seconds] => compose_span(0, *hours, *minutes, *seconds, 0),
        [days, hours, minutes, seconds] => compose_span(*days, *hours, *minutes, *seconds, 0),
        [days, hours, minutes, seconds, millis] => compose_span(*days, *hours, *minutes, *seconds, *millis),
        _ => None,
    };

    millis.map(Variant::TimeSpan)
          .ok_or_else(|| invalid_argument("time span is out of range"))
}

fn compose_span(days: i64, hours: i64, minutes: i64, seconds: i64, millis: i64) -> Option<i64> {
    days.checked_mul(24)?
        .checked_add(hours)?
        .checked_mul(60)?
        .checked_add(minutes)?
        .checked_mul(60)?
        .checked_add(seconds)?
        .checked_mul(1000)?
        .checked_add(millis)
}

/// Builds a UTC date-time.
///
/// A single argument is milliseconds since the Unix epoch. Otherwise the
/// arguments are year, month, day, hour, minute, second and millisecond;
/// omitted trailing parts default to the start of the period.
///
/// # Errors
/// `INVALID_ARGUMENT` if the parts do not form a valid date.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::function::date::date,
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let ops = TypeUnsafeVariantOperations;
/// let value = date(&[2024.into(), 2.into(), 29.into()], &ops).unwrap();
/// assert_eq!(value.to_string(), "2024-02-29T00:00:00.000Z");
///
/// assert!(date(&[2023.into(), 2.into(), 29.into()], &ops).is_err());
/// ```
pub fn date(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Range(1, 7).check(args.len())?;
    if let [millis] = args {
        let millis = to_long(millis, ops)?;
        return DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Variant::DateTime)
            .ok_or_else(|| invalid_argument(format!("{millis} is not a valid timestamp")));
    }

    let mut parts = [0, 1, 1, 0, 0, 0, 0];
    for (part, arg) in parts.iter_mut().zip(args) {
        *part = to_integer(arg, ops)?;
    }

    compose_date(parts).map(Variant::DateTime)
                       .ok_or_else(|| invalid_argument(format!("{parts:?} is not a valid date")))
}

fn compose_date([year, month, day, hour, minute, second, millis]: [i32; 7]) -> Option<DateTime<Utc>> {
    let unsigned = |value: i32| u32::try_from(value).ok();
    let date = NaiveDate::from_ymd_opt(year, unsigned(month)?, unsigned(day)?)?;
    let time = date.and_hms_milli_opt(unsigned(hour)?,
                                      unsigned(minute)?,
                                      unsigned(second)?,
                                      unsigned(millis)?)?;
    Some(time.and_utc())
}

/// Returns the ISO weekday of a date: 1 for Monday through 7 for Sunday.
pub fn day_of_week(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    let time = to_date_time(&args[0], ops)?;
    Ok(part(time.weekday().number_from_monday()))
}

pub fn year(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    Ok(Variant::Integer(to_date_time(&args[0], ops)?.year()))
}

pub fn month(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    Ok(part(to_date_time(&args[0], ops)?.month()))
}

pub fn day(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    Ok(part(to_date_time(&args[0], ops)?.day()))
}

pub fn hour(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    Ok(part(to_date_time(&args[0], ops)?.hour()))
}

pub fn minute(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    Ok(part(to_date_time(&args[0], ops)?.minute()))
}

pub fn second(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    Ok(part(to_date_time(&args[0], ops)?.second()))
}

fn part(value: u32) -> Variant {
    i32::try_from(value).map_or(Variant::Long(i64::from(value)), Variant::Integer)
}
