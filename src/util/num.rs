/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_I64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use formulary::util::num::{MAX_SAFE_I64_INT, i64_to_f64_checked};
///
/// assert_eq!(i64_to_f64_checked(42, "too big!").unwrap(), 42.0);
/// assert!(i64_to_f64_checked(MAX_SAFE_I64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_I64_INT.unsigned_abs() {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `i64` to the nearest `f64`.
///
/// Used where a `Long` is promoted to `Double` along the numeric ladder, which
/// may round values beyond `2^53`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts an `i64` to `f32` if and only if it is exactly representable.
///
/// ## Errors
/// Returns `Err(error)` if the nearest `f32` differs from `value`.
///
/// ## Example
/// ```
/// use formulary::util::num::i64_to_f32_checked;
///
/// assert_eq!(i64_to_f32_checked(16_777_216, ()).unwrap(), 16_777_216.0);
/// assert!(i64_to_f32_checked(16_777_217, ()).is_err());
/// assert!(i64_to_f32_checked(i64::MAX, ()).is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
pub fn i64_to_f32_checked<E>(value: i64, error: E) -> Result<f32, E> {
    let nearest = value as f32;
    // Compared in i128 so that 2^63 does not saturate back to i64::MAX.
    if f64::from(nearest) as i128 != i128::from(value) {
        return Err(error);
    }
    Ok(nearest)
}

/// Converts an `f64` to `f32` if the value is within the `f32` range.
///
/// Non-finite values are passed through. Finite values outside the `f32`
/// range would become infinite and are rejected.
///
/// ## Errors
/// Returns `Err(error)` for finite values beyond `f32::MAX` in magnitude.
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_f32_checked<E>(value: f64, error: E) -> Result<f32, E> {
    if value.is_finite() && value.abs() > f64::from(f32::MAX) {
        return Err(error);
    }
    Ok(value as f32)
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Errors
/// Returns `Err(error)` for non-finite values and values outside the `i64`
/// range.
///
/// ## Example
/// ```
/// use formulary::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(-2.9, ()).unwrap(), -2);
/// assert!(f64_to_i64_truncated(f64::NAN, ()).is_err());
/// assert!(f64_to_i64_truncated(1e20, ()).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated<E>(value: f64, error: E) -> Result<i64, E> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(error);
    }
    Ok(truncated as i64)
}

/// Converts an `i64` to `i32` if it fits.
///
/// ## Errors
/// Returns `Err(error)` if the value is outside the `i32` range.
pub fn i64_to_i32_checked<E>(value: i64, error: E) -> Result<i32, E> {
    i32::try_from(value).map_err(|_| error)
}

/// Converts an `i64` index to `usize` if it is a valid index.
///
/// ## Errors
/// Returns `Err(error)` for negative values.
pub fn i64_to_index<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Converts a count to `i32`, saturating at `i32::MAX`.
#[must_use]
pub fn usize_to_i32_saturating(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
