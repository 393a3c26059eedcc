use crate::{
    calculator::{
        evaluator::{core::EvalResult, stack::CalculationStack},
        token::{ExpressionToken, ExpressionTokenType as Kind},
    },
    error::CalculationError,
    variant::{OperationResult, Variant, VariantOperations, VariantType, operations::unsupported},
};

type BinaryOperation = fn(&dyn VariantOperations, &Variant, &Variant) -> OperationResult<Variant>;

/// Applies the operator `token` to the operands on top of `stack`.
///
/// Unary operators pop one operand, binary operators pop the right operand
/// first. The result is pushed back.
///
/// # Parameters
/// - `token`: The operator token.
/// - `stack`: The calculation stack.
/// - `ops`: The operations strategy.
///
/// # Errors
/// - `STACK_UNDERFLOW` if an operand is missing.
/// - The error of the failing operation, positioned at `token`.
/// - `INTERNAL` for token kinds that are not operators.
pub fn apply_operator(token: &ExpressionToken,
                      stack: &mut CalculationStack,
                      ops: &dyn VariantOperations)
                      -> EvalResult<()> {
    let result = match token.kind {
        Kind::Unary => {
            let value = stack.pop(token)?;
            ops.negative(&value)
        },
        Kind::Not => {
            let value = stack.pop(token)?;
            ops.not(&value)
        },
        Kind::IsNull | Kind::IsNotNull => {
            let value = stack.pop(token)?;
            Ok(Variant::Boolean(value.is_null() == (token.kind == Kind::IsNull)))
        },
        kind => {
            let Some(operation) = binary_operation(kind) else {
                return Err(CalculationError::Internal { details: format!("{kind} cannot be evaluated"),
                                                        line:    token.line,
                                                        column:  token.column, });
            };
            let right = stack.pop(token)?;
            let left = stack.pop(token)?;
            operation(ops, &left, &right)
        },
    };

    let value = result.map_err(|source| CalculationError::Operation { source,
                                                                      line: token.line,
                                                                      column: token.column })?;
    stack.push(value);
    Ok(())
}

fn binary_operation(kind: Kind) -> Option<BinaryOperation> {
    let operation: BinaryOperation = match kind {
        Kind::Plus => |ops, l, r| ops.add(l, r),
        Kind::Minus => |ops, l, r| ops.sub(l, r),
        Kind::Star => |ops, l, r| ops.mul(l, r),
        Kind::Slash => |ops, l, r| ops.div(l, r),
        Kind::Percent => |ops, l, r| ops.modulo(l, r),
        Kind::Power => |ops, l, r| ops.pow(l, r),
        Kind::Equal => |ops, l, r| ops.equal(l, r),
        Kind::NotEqual => |ops, l, r| ops.not_equal(l, r),
        Kind::More => |ops, l, r| ops.more(l, r),
        Kind::Less => |ops, l, r| ops.less(l, r),
        Kind::EqualMore => |ops, l, r| ops.more_equal(l, r),
        Kind::EqualLess => |ops, l, r| ops.less_equal(l, r),
        Kind::ShiftLeft => |ops, l, r| ops.lsh(l, r),
        Kind::ShiftRight => |ops, l, r| ops.rsh(l, r),
        Kind::And => |ops, l, r| ops.and(l, r),
        Kind::Or => |ops, l, r| ops.or(l, r),
        Kind::Xor => |ops, l, r| ops.xor(l, r),
        Kind::In => |ops, l, r| ops.contains(r, l),
        Kind::NotIn => |ops, l, r| ops.not(&ops.contains(r, l)?),
        Kind::Element => |ops, l, r| ops.get_element(l, r),
        Kind::Like => like,
        Kind::NotLike => |ops, l, r| ops.not(&like(ops, l, r)?),
        _ => return None,
    };
    Some(operation)
}

/// Matches `left` against the `LIKE` pattern `right`.
///
/// Both operands are converted to strings. A `Null` operand gives `Null`.
fn like(ops: &dyn VariantOperations, left: &Variant, right: &Variant) -> OperationResult<Variant> {
    if left.is_null() || right.is_null() {
        return Ok(Variant::Null);
    }

    let text = ops.convert(left, VariantType::String)
                  .map_err(|_| unsupported("LIKE", left, right))?;
    let pattern = ops.convert(right, VariantType::String)
                     .map_err(|_| unsupported("LIKE", left, right))?;

    match (text.as_str(), pattern.as_str()) {
        (Some(text), Some(pattern)) => Ok(Variant::Boolean(like_matches(text, pattern))),
        _ => Err(unsupported("LIKE", left, right)),
    }
}

/// Tests `text` against an SQL `LIKE` pattern, ignoring case.
///
/// `%` matches any run of characters, `_` matches exactly one.
///
/// # Example
/// ```
/// use formulary::calculator::evaluator::operator::like_matches;
///
/// assert!(like_matches("Hello", "h%o"));
/// assert!(like_matches("abc", "a_c"));
/// assert!(!like_matches("abc", "a_"));
/// ```
#[must_use]
pub fn like_matches(text: &str, pattern: &str) -> bool {
    let text: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    let pattern: Vec<char> = pattern.chars().flat_map(char::to_lowercase).collect();

    // matched[j] is whether text[..i] matches pattern[..j].
    let mut matched = vec![false; pattern.len() + 1];
    matched[0] = true;
    for (j, &p) in pattern.iter().enumerate() {
        matched[j + 1] = matched[j] && p == '%';
    }

    for &ch in &text {
        let mut diagonal = matched[0];
        matched[0] = false;
        for (j, &p) in pattern.iter().enumerate() {
            let above = matched[j + 1];
            matched[j + 1] = match p {
                '%' => matched[j] || above,
                '_' => diagonal,
                _ => diagonal && p == ch,
            };
            diagonal = above;
        }
    }

    matched[pattern.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_handles_runs_and_literals() {
        assert!(like_matches("", "%"));
        assert!(like_matches("abc", "%"));
        assert!(like_matches("abc", "%c"));
        assert!(like_matches("ABC", "a%%c"));
        assert!(!like_matches("abc", "b%"));
        assert!(!like_matches("", "_"));
    }
}
