use crate::{
    calculator::function::core::{Arity, FunctionResult, invalid_argument, to_boolean, to_integer},
    variant::{OperationResult, Variant, VariantOperations},
};

/// Returns the smallest argument according to the operations strategy.
///
/// A comparison that yields `Null` keeps the current minimum.
pub fn min(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::AtLeast(2).check(args.len())?;
    select(args, |current, candidate| ops.more(current, candidate))
}

/// Returns the largest argument according to the operations strategy.
pub fn max(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::AtLeast(2).check(args.len())?;
    select(args, |current, candidate| ops.less(current, candidate))
}

/// Keeps the first argument until `replace(current, candidate)` is `true`.
fn select<F>(args: &[Variant], replace: F) -> FunctionResult<Variant>
    where F: Fn(&Variant, &Variant) -> OperationResult<Variant>
{
    let Some((first, rest)) = args.split_first() else {
        return Ok(Variant::Null);
    };

    let mut result = first;
    for candidate in rest {
        if replace(result, candidate)? == Variant::Boolean(true) {
            result = candidate;
        }
    }
    Ok(result.clone())
}

/// Adds all arguments from left to right.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::function::aggregate::sum,
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let args = [Variant::Integer(1), Variant::Double(2.5), Variant::Long(3)];
/// assert_eq!(sum(&args, &TypeUnsafeVariantOperations).unwrap(), Variant::Double(6.5));
/// ```
pub fn sum(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::AtLeast(2).check(args.len())?;
    let Some((first, rest)) = args.split_first() else {
        return Ok(Variant::Null);
    };
    rest.iter()
        .try_fold(first.clone(), |total, value| ops.add(&total, value))
        .map_err(Into::into)
}

/// Returns the second argument if the first is true, otherwise the third.
///
/// All arguments are evaluated before the call.
pub fn if_(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(3).check(args.len())?;
    let branch = if to_boolean(&args[0], ops)? { &args[1] } else { &args[2] };
    Ok(branch.clone())
}

/// Returns the argument selected by the 1-based index in the first argument.
///
/// # Errors
/// `INVALID_ARGUMENT` if the index does not select one of the following
/// arguments.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::function::aggregate::choose,
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let ops = TypeUnsafeVariantOperations;
/// let args = [Variant::Integer(2), "a".into(), "b".into(), "c".into()];
///
/// assert_eq!(choose(&args, &ops).unwrap(), Variant::from("b"));
/// assert!(choose(&[Variant::Integer(4), "a".into(), "b".into()], &ops).is_err());
/// ```
pub fn choose(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::AtLeast(3).check(args.len())?;
    let index = to_integer(&args[0], ops)?;
    usize::try_from(index).ok()
                          .filter(|index| *index >= 1)
                          .and_then(|index| args.get(index))
                          .cloned()
                          .ok_or_else(|| {
                              invalid_argument(format!("choice {index} is out of range 1 to {}",
                                                       args.len() - 1))
                          })
}
