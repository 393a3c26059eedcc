use std::cmp::Ordering;

use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    error::VariantError,
    util::num::{i64_to_f64, i64_to_index},
    variant::{Variant, VariantType},
};

/// Result type returned by variant operations.
pub type OperationResult<T> = Result<T, VariantError>;

/// The operations strategy: every operator the evaluator can apply to
/// variants.
///
/// Implementors only provide [`VariantOperations::convert`]. The operators
/// are written in terms of it, so two strategies with different conversion
/// rules automatically differ in how permissive their operators are.
///
/// Common rules of the provided operators:
/// - A `Null` operand makes arithmetic, logical, and ordering operators
///   return `Null`.
/// - Two numeric operands are both converted to the wider type on the ladder
///   `Integer < Long < Float < Double`. Otherwise the right operand is
///   converted to the type of the left one.
/// - Integer arithmetic that overflows is redone as `Long`, and `Long`
///   arithmetic that overflows is redone as `Double`.
pub trait VariantOperations: Send + Sync {
    /// Converts `value` to the `target` type.
    ///
    /// Converting a value to its own type returns a copy of it.
    fn convert(&self, value: &Variant, target: VariantType) -> OperationResult<Variant>;

    /// Converts both operands to their common type.
    fn unify(&self, left: &Variant, right: &Variant) -> OperationResult<(Variant, Variant)> {
        let target = left.variant_type().common_type(right.variant_type());
        Ok((self.convert(left, target)?, self.convert(right, target)?))
    }

    /// Adds numbers and time spans, shifts date-times, and concatenates
    /// strings.
    ///
    /// # Example
    /// ```
    /// use formulary::variant::{TypeUnsafeVariantOperations, Variant, VariantOperations};
    ///
    /// let ops = TypeUnsafeVariantOperations;
    ///
    /// let sum = ops.add(&Variant::Integer(i32::MAX), &Variant::Integer(1)).unwrap();
    /// assert_eq!(sum, Variant::Long(2_147_483_648));
    ///
    /// let text = ops.add(&"xyz".into(), &Variant::Integer(123)).unwrap();
    /// assert_eq!(text, Variant::from("xyz123"));
    /// ```
    fn add(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        match (left, right) {
            (Variant::Null, _) | (_, Variant::Null) => Ok(Variant::Null),
            (Variant::DateTime(time), Variant::TimeSpan(span))
            | (Variant::TimeSpan(span), Variant::DateTime(time)) => shift_time(*time, *span, "+"),
            _ => {
                let (a, b) = unify_operands(self, "+", left, right)?;
                if let Some(result) = apply_arithmetic(&ADD, &a, &b)? {
                    return Ok(result);
                }
                match (a, b) {
                    (Variant::String(a), Variant::String(b)) => Ok(Variant::String(a + &b)),
                    (Variant::TimeSpan(a), Variant::TimeSpan(b)) => {
                        a.checked_add(b).map(Variant::TimeSpan).ok_or_else(|| out_of_range("+"))
                    },
                    _ => Err(unsupported("+", left, right)),
                }
            },
        }
    }

    /// Subtracts numbers and time spans, shifts date-times back, and measures
    /// the time span between two date-times.
    fn sub(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        match (left, right) {
            (Variant::Null, _) | (_, Variant::Null) => Ok(Variant::Null),
            (Variant::DateTime(a), Variant::DateTime(b)) => {
                Ok(Variant::TimeSpan(a.signed_duration_since(*b).num_milliseconds()))
            },
            (Variant::DateTime(time), Variant::TimeSpan(span)) => {
                let span = span.checked_neg().ok_or_else(|| out_of_range("-"))?;
                shift_time(*time, span, "-")
            },
            _ => {
                let (a, b) = unify_operands(self, "-", left, right)?;
                if let Some(result) = apply_arithmetic(&SUB, &a, &b)? {
                    return Ok(result);
                }
                match (a, b) {
                    (Variant::TimeSpan(a), Variant::TimeSpan(b)) => {
                        a.checked_sub(b).map(Variant::TimeSpan).ok_or_else(|| out_of_range("-"))
                    },
                    _ => Err(unsupported("-", left, right)),
                }
            },
        }
    }

    fn mul(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        numeric_only(self, &MUL, left, right)
    }

    /// Divides numbers. Division of integers truncates toward zero.
    fn div(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        numeric_only(self, &DIV, left, right)
    }

    fn modulo(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        numeric_only(self, &REM, left, right)
    }

    /// Raises `left` to the power of `right`. The result is always a
    /// `Double`.
    fn pow(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        if left.is_null() || right.is_null() {
            return Ok(Variant::Null);
        }
        let base = self.convert(left, VariantType::Double)
                       .map_err(|_| unsupported("^", left, right))?;
        let exponent = self.convert(right, VariantType::Double)
                           .map_err(|_| unsupported("^", left, right))?;
        match (base, exponent) {
            (Variant::Double(b), Variant::Double(e)) => Ok(Variant::Double(b.powf(e))),
            _ => Err(unsupported("^", left, right)),
        }
    }

    /// Negates a number or a time span.
    fn negative(&self, value: &Variant) -> OperationResult<Variant> {
        match value {
            Variant::Null => Ok(Variant::Null),
            Variant::Integer(v) => Ok(v.checked_neg()
                                       .map_or_else(|| Variant::Long(-i64::from(*v)), Variant::Integer)),
            Variant::Long(v) => Ok(v.checked_neg()
                                    .map_or_else(|| Variant::Double(-i64_to_f64(*v)), Variant::Long)),
            Variant::Float(v) => Ok(Variant::Float(-v)),
            Variant::Double(v) => Ok(Variant::Double(-v)),
            Variant::TimeSpan(v) => v.checked_neg()
                                     .map(Variant::TimeSpan)
                                     .ok_or_else(|| out_of_range("-")),
            other => Err(unsupported_unary("-", other)),
        }
    }

    /// Logical conjunction of booleans, bitwise for integers.
    fn and(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        bitwise(self, "AND", left, right, &Bitwise { boolean: |a, b| a && b,
                                                     integer: |a, b| a & b,
                                                     long:    |a, b| a & b, })
    }

    /// Logical disjunction of booleans, bitwise for integers.
    fn or(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        bitwise(self, "OR", left, right, &Bitwise { boolean: |a, b| a || b,
                                                    integer: |a, b| a | b,
                                                    long:    |a, b| a | b, })
    }

    /// Exclusive disjunction of booleans, bitwise for integers.
    fn xor(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        bitwise(self, "XOR", left, right, &Bitwise { boolean: |a, b| a ^ b,
                                                     integer: |a, b| a ^ b,
                                                     long:    |a, b| a ^ b, })
    }

    /// Logical negation of a boolean, bitwise complement of an integer.
    fn not(&self, value: &Variant) -> OperationResult<Variant> {
        match value {
            Variant::Null => Ok(Variant::Null),
            Variant::Boolean(v) => Ok(Variant::Boolean(!v)),
            Variant::Integer(v) => Ok(Variant::Integer(!v)),
            Variant::Long(v) => Ok(Variant::Long(!v)),
            other => Err(unsupported_unary("NOT", other)),
        }
    }

    fn lsh(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        shift(self, "<<", left, right, i32::checked_shl, i64::checked_shl)
    }

    fn rsh(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        shift(self, ">>", left, right, i32::checked_shr, i64::checked_shr)
    }

    /// Tests two values for equality.
    ///
    /// `Null` equals only `Null`. Values whose types cannot be brought
    /// together are not equal. A number and a numeric string are compared as
    /// numbers.
    fn equal(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        Ok(Variant::Boolean(equals(self, left, right)))
    }

    fn not_equal(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        Ok(Variant::Boolean(!equals(self, left, right)))
    }

    fn more(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        compare(self, ">", left, right, Ordering::is_gt)
    }

    fn less(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        compare(self, "<", left, right, Ordering::is_lt)
    }

    fn more_equal(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        compare(self, ">=", left, right, Ordering::is_ge)
    }

    fn less_equal(&self, left: &Variant, right: &Variant) -> OperationResult<Variant> {
        compare(self, "<=", left, right, Ordering::is_le)
    }

    /// Tests whether `value` is an element of `container`.
    ///
    /// A container that is not an array is compared with `value` directly.
    ///
    /// # Example
    /// ```
    /// use formulary::variant::{TypeUnsafeVariantOperations, Variant, VariantOperations};
    ///
    /// let ops = TypeUnsafeVariantOperations;
    /// let items = Variant::Array(vec![1.into(), 2.into(), 3.into()]);
    ///
    /// assert_eq!(ops.contains(&items, &Variant::Integer(3)).unwrap(), Variant::Boolean(true));
    /// assert_eq!(ops.contains(&items, &Variant::from("2")).unwrap(), Variant::Boolean(true));
    /// assert_eq!(ops.contains(&items, &Variant::Integer(5)).unwrap(), Variant::Boolean(false));
    /// ```
    fn contains(&self, container: &Variant, value: &Variant) -> OperationResult<Variant> {
        let found = match container {
            Variant::Array(items) => items.iter().any(|item| equals(self, item, value)),
            other => equals(self, other, value),
        };
        Ok(Variant::Boolean(found))
    }

    /// Returns the element of an array, or the character of a string, at
    /// `index`.
    fn get_element(&self, value: &Variant, index: &Variant) -> OperationResult<Variant> {
        match value {
            Variant::Null => Ok(Variant::Null),
            Variant::Array(items) => {
                let position = element_index(self, index, items.len())?;
                items.get(position)
                     .cloned()
                     .ok_or_else(|| unsupported("[]", value, index))
            },
            Variant::String(text) => {
                let position = element_index(self, index, text.chars().count())?;
                text.chars()
                    .nth(position)
                    .map(|ch| Variant::String(ch.to_string()))
                    .ok_or_else(|| unsupported("[]", value, index))
            },
            other => Err(unsupported("[]", other, index)),
        }
    }
}

/// Per-type implementations of one arithmetic operator.
struct Arithmetic {
    symbol:      &'static str,
    integer:     fn(i32, i32) -> Option<i32>,
    long:        fn(i64, i64) -> Option<i64>,
    real:        fn(f64, f64) -> f64,
    checks_zero: bool,
}

const ADD: Arithmetic = Arithmetic { symbol:      "+",
                                     integer:     i32::checked_add,
                                     long:        i64::checked_add,
                                     real:        |a, b| a + b,
                                     checks_zero: false, };
const SUB: Arithmetic = Arithmetic { symbol:      "-",
                                     integer:     i32::checked_sub,
                                     long:        i64::checked_sub,
                                     real:        |a, b| a - b,
                                     checks_zero: false, };
const MUL: Arithmetic = Arithmetic { symbol:      "*",
                                     integer:     i32::checked_mul,
                                     long:        i64::checked_mul,
                                     real:        |a, b| a * b,
                                     checks_zero: false, };
const DIV: Arithmetic = Arithmetic { symbol:      "/",
                                     integer:     i32::checked_div,
                                     long:        i64::checked_div,
                                     real:        |a, b| a / b,
                                     checks_zero: true, };
const REM: Arithmetic = Arithmetic { symbol:      "%",
                                     integer:     i32::checked_rem,
                                     long:        i64::checked_rem,
                                     real:        |a, b| a % b,
                                     checks_zero: true, };

/// Applies `op` to two operands of the same numeric type.
///
/// Returns `Ok(None)` if the operands are not numeric.
#[allow(clippy::cast_possible_truncation)]
fn apply_arithmetic(op: &Arithmetic, left: &Variant, right: &Variant) -> OperationResult<Option<Variant>> {
    if op.checks_zero && matches!(right, Variant::Integer(0) | Variant::Long(0)) {
        return Err(VariantError::DivisionByZero);
    }

    let result = match (left, right) {
        (Variant::Integer(a), Variant::Integer(b)) => {
            (op.integer)(*a, *b).map(Variant::Integer)
                                .or_else(|| (op.long)(i64::from(*a), i64::from(*b)).map(Variant::Long))
                                .unwrap_or_else(|| Variant::Double((op.real)(f64::from(*a), f64::from(*b))))
        },
        (Variant::Long(a), Variant::Long(b)) => {
            (op.long)(*a, *b).map_or_else(|| Variant::Double((op.real)(i64_to_f64(*a), i64_to_f64(*b))),
                                          Variant::Long)
        },
        (Variant::Float(a), Variant::Float(b)) => {
            let wide = (op.real)(f64::from(*a), f64::from(*b));
            let narrow = wide as f32;
            if narrow.is_finite() || !wide.is_finite() {
                Variant::Float(narrow)
            } else {
                Variant::Double(wide)
            }
        },
        (Variant::Double(a), Variant::Double(b)) => Variant::Double((op.real)(*a, *b)),
        _ => return Ok(None),
    };

    Ok(Some(result))
}

fn numeric_only<O: VariantOperations + ?Sized>(ops: &O,
                                               op: &Arithmetic,
                                               left: &Variant,
                                               right: &Variant)
                                               -> OperationResult<Variant> {
    if left.is_null() || right.is_null() {
        return Ok(Variant::Null);
    }
    let (a, b) = unify_operands(ops, op.symbol, left, right)?;
    apply_arithmetic(op, &a, &b)?.ok_or_else(|| unsupported(op.symbol, left, right))
}

/// Per-type implementations of one logical operator.
struct Bitwise {
    boolean: fn(bool, bool) -> bool,
    integer: fn(i32, i32) -> i32,
    long:    fn(i64, i64) -> i64,
}

fn bitwise<O: VariantOperations + ?Sized>(ops: &O,
                                          symbol: &'static str,
                                          left: &Variant,
                                          right: &Variant,
                                          op: &Bitwise)
                                          -> OperationResult<Variant> {
    if left.is_null() || right.is_null() {
        return Ok(Variant::Null);
    }
    match unify_operands(ops, symbol, left, right)? {
        (Variant::Boolean(a), Variant::Boolean(b)) => Ok(Variant::Boolean((op.boolean)(a, b))),
        (Variant::Integer(a), Variant::Integer(b)) => Ok(Variant::Integer((op.integer)(a, b))),
        (Variant::Long(a), Variant::Long(b)) => Ok(Variant::Long((op.long)(a, b))),
        _ => Err(unsupported(symbol, left, right)),
    }
}

fn shift<O: VariantOperations + ?Sized>(ops: &O,
                                        symbol: &'static str,
                                        left: &Variant,
                                        right: &Variant,
                                        integer: fn(i32, u32) -> Option<i32>,
                                        long: fn(i64, u32) -> Option<i64>)
                                        -> OperationResult<Variant> {
    if left.is_null() || right.is_null() {
        return Ok(Variant::Null);
    }
    let Variant::Integer(amount) = ops.convert(right, VariantType::Integer)
                                      .map_err(|_| unsupported(symbol, left, right))?
    else {
        return Err(unsupported(symbol, left, right));
    };

    let invalid = || VariantError::InvalidArgument { details: format!("cannot shift {} by {amount} bits",
                                                                      left.variant_type()) };
    let amount = u32::try_from(amount).map_err(|_| invalid())?;

    match left {
        Variant::Integer(v) => integer(*v, amount).map(Variant::Integer).ok_or_else(invalid),
        Variant::Long(v) => long(*v, amount).map(Variant::Long).ok_or_else(invalid),
        other => Err(unsupported(symbol, other, right)),
    }
}

/// Brings two operands to a type they can be compared in.
///
/// A number and a string meet as `Double`, so numeric strings compare by
/// value. Every other pair is unified.
fn comparable<O: VariantOperations + ?Sized>(ops: &O,
                                             left: &Variant,
                                             right: &Variant)
                                             -> OperationResult<(Variant, Variant)> {
    let number_and_text = |a: &Variant, b: &Variant| a.is_numeric() && matches!(b, Variant::String(_));
    if number_and_text(left, right) || number_and_text(right, left) {
        return Ok((ops.convert(left, VariantType::Double)?, ops.convert(right, VariantType::Double)?));
    }
    ops.unify(left, right)
}

fn equals<O: VariantOperations + ?Sized>(ops: &O, left: &Variant, right: &Variant) -> bool {
    match (left, right) {
        (Variant::Null, Variant::Null) => true,
        (Variant::Null, _) | (_, Variant::Null) => false,
        (Variant::Array(a), Variant::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| equals(ops, x, y))
        },
        _ => comparable(ops, left, right).is_ok_and(|(a, b)| a == b),
    }
}

fn compare<O: VariantOperations + ?Sized>(ops: &O,
                                          symbol: &'static str,
                                          left: &Variant,
                                          right: &Variant,
                                          accept: fn(Ordering) -> bool)
                                          -> OperationResult<Variant> {
    if left.is_null() || right.is_null() {
        return Ok(Variant::Null);
    }
    let (a, b) = comparable(ops, left, right).map_err(|_| unsupported(symbol, left, right))?;

    let ordering = match (&a, &b) {
        (Variant::Integer(x), Variant::Integer(y)) => Some(x.cmp(y)),
        (Variant::Long(x), Variant::Long(y)) | (Variant::TimeSpan(x), Variant::TimeSpan(y)) => {
            Some(x.cmp(y))
        },
        (Variant::Float(x), Variant::Float(y)) => x.partial_cmp(y),
        (Variant::Double(x), Variant::Double(y)) => x.partial_cmp(y),
        (Variant::String(x), Variant::String(y)) => Some(x.cmp(y)),
        (Variant::Boolean(x), Variant::Boolean(y)) => Some(x.cmp(y)),
        (Variant::DateTime(x), Variant::DateTime(y)) => Some(x.cmp(y)),
        _ => return Err(unsupported(symbol, left, right)),
    };

    Ok(Variant::Boolean(ordering.is_some_and(accept)))
}

fn element_index<O: VariantOperations + ?Sized>(ops: &O,
                                                index: &Variant,
                                                length: usize)
                                                -> OperationResult<usize> {
    let Variant::Long(raw) = ops.convert(index, VariantType::Long)? else {
        return Err(VariantError::InvalidArgument { details: format!("index {index} is not an integer") });
    };
    i64_to_index(raw, ()).ok()
                         .filter(|position| *position < length)
                         .ok_or(VariantError::IndexOutOfRange { index: raw,
                                                                length })
}

/// Unifies operands, reporting conversions the strategy refuses as an
/// unsupported operation.
fn unify_operands<O: VariantOperations + ?Sized>(ops: &O,
                                                 symbol: &'static str,
                                                 left: &Variant,
                                                 right: &Variant)
                                                 -> OperationResult<(Variant, Variant)> {
    ops.unify(left, right).map_err(|e| match e {
                              VariantError::UnsupportedConversion { .. } => unsupported(symbol, left, right),
                              other => other,
                          })
}

fn shift_time(time: DateTime<Utc>, span: i64, symbol: &'static str) -> OperationResult<Variant> {
    TimeDelta::try_milliseconds(span).and_then(|delta| time.checked_add_signed(delta))
                                     .map(Variant::DateTime)
                                     .ok_or_else(|| out_of_range(symbol))
}

fn out_of_range(symbol: &'static str) -> VariantError {
    VariantError::InvalidArgument { details: format!("result of '{symbol}' is out of range") }
}

/// Creates the error for a binary operator applied to unsupported operands.
pub(crate) fn unsupported(operation: &'static str, left: &Variant, right: &Variant) -> VariantError {
    VariantError::UnsupportedOperation { operation,
                                         operands: format!("{} and {}",
                                                           left.variant_type(),
                                                           right.variant_type()) }
}

/// Creates the error for a unary operator applied to an unsupported operand.
pub(crate) fn unsupported_unary(operation: &'static str, value: &Variant) -> VariantError {
    VariantError::UnsupportedOperation { operation,
                                         operands: value.variant_type().to_string() }
}
