use crate::{
    calculator::function::core::{Arity, FunctionResult, to_text},
    variant::{Variant, VariantOperations},
};

/// Returns `true` for `Null`, the empty string and the empty array.
pub fn empty(args: &[Variant], _ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(1).check(args.len())?;
    Ok(Variant::Boolean(args[0].is_empty()))
}

pub fn null(args: &[Variant], _ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(0).check(args.len())?;
    Ok(Variant::Null)
}

/// Tests whether the first argument contains the second.
///
/// Arrays are searched for an equal element. Anything else is converted to a
/// string and searched for the second argument as a substring. `Null`
/// contains nothing.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::function::misc::contains,
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let ops = TypeUnsafeVariantOperations;
/// assert_eq!(contains(&["abcd".into(), "bc".into()], &ops).unwrap(), Variant::Boolean(true));
/// assert_eq!(contains(&[Variant::Null, "".into()], &ops).unwrap(), Variant::Boolean(false));
/// ```
pub fn contains(args: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Arity::Exact(2).check(args.len())?;
    let (container, value) = (&args[0], &args[1]);
    match container {
        Variant::Null => Ok(Variant::Boolean(false)),
        Variant::Array(_) => Ok(ops.contains(container, value)?),
        _ => {
            let haystack = to_text(container, ops)?;
            let needle = to_text(value, ops)?;
            Ok(Variant::Boolean(haystack.contains(&needle)))
        },
    }
}

/// Collects the arguments into an array.
pub fn array(args: &[Variant], _ops: &dyn VariantOperations) -> FunctionResult<Variant> {
    Ok(Variant::Array(args.to_vec()))
}
