/// Numeric conversion helpers.
///
/// This module provides the conversions between the numeric payloads of a
/// variant. Widening helpers never fail. Narrowing helpers return a
/// `Result`, which is `Ok` only if the value fits the target type, so no
/// conversion silently wraps or saturates.
pub mod num;
