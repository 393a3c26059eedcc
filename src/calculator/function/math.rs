use std::f64::consts;

use crate::{
    calculator::function::core::{Arity, FunctionResult, invalid_argument, to_double},
    util::num::{f64_to_i64_truncated, i64_to_f64},
    variant::{Variant, VariantOperations},
};

/// Generates a function that converts its argument to `Double` and applies
/// an `f64` method.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::function::math::sqrt,
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let r = sqrt(&[Variant::Integer(16)], &TypeUnsafeVariantOperations).unwrap();
/// assert_eq!(r, Variant::Double(4.0));
/// ```
macro_rules! double_function {
    ($fname:ident, $method:ident) => {
        pub fn $fname(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
            Arity::Exact(1).check(args.len())?;
            Ok(Variant::Double(to_double(&args[0], ops)?.$method()))
        }
    };
}

double_function!(acos, acos);
double_function!(asin, asin);
double_function!(atan, atan);
double_function!(exp, exp);
double_function!(ln, ln);
double_function!(log10, log10);
double_function!(ceil, ceil);
double_function!(floor, floor);
double_function!(round, round);
double_function!(sin, sin);
double_function!(cos, cos);
double_function!(tan, tan);
double_function!(sqrt, sqrt);

/// Returns the absolute value, keeping the numeric type.
///
/// Values whose absolute value does not fit their type widen. Non-numeric
/// arguments are converted to `Double`.
pub fn abs(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    let result = match &args[0] {
        Variant::Integer(v) => v.checked_abs()
                                .map_or_else(|| Variant::Long(i64::from(*v).abs()), Variant::Integer),
        Variant::Long(v) => v.checked_abs()
                             .map_or_else(|| Variant::Double(i64_to_f64(*v).abs()), Variant::Long),
        Variant::Float(v) => Variant::Float(v.abs()),
        Variant::Double(v) => Variant::Double(v.abs()),
        other => Variant::Double(to_double(other, ops)?.abs()),
    };
    Ok(result)
}

/// Returns the square of the argument as a `Double`.
pub fn sqr(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    let value = to_double(&args[0], ops)?;
    Ok(Variant::Double(value * value))
}

/// Truncates toward zero.
///
/// Returns an `Integer`, or a `Long` for values beyond the `i32` range.
///
/// # Errors
/// `INVALID_ARGUMENT` if the value does not fit an `i64` or is not a number.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::function::math::trunc,
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let ops = TypeUnsafeVariantOperations;
/// assert_eq!(trunc(&[Variant::Double(-2.7)], &ops).unwrap(), Variant::Integer(-2));
/// assert_eq!(trunc(&[Variant::Double(5e9)], &ops).unwrap(), Variant::Long(5_000_000_000));
/// ```
pub fn trunc(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    let value = to_double(&args[0], ops)?;
    let details = format!("{value} cannot be truncated to an integer");
    let truncated = f64_to_i64_truncated(value, invalid_argument(details))?;
    Ok(i32::try_from(truncated).map_or(Variant::Long(truncated), Variant::Integer))
}

pub fn e(args: &[Variant], _ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(0).check(args.len())?;
    Ok(Variant::Double(consts::E))
}

pub fn pi(args: &[Variant], _ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(0).check(args.len())?;
    Ok(Variant::Double(consts::PI))
}

/// Returns a uniformly distributed `Double` in `[0, 1)`.
pub fn random(args: &[Variant], _ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(0).check(args.len())?;
    Ok(Variant::Double(rand::random::<f64>()))
}
