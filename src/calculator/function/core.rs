use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    error::{FunctionError, VariantError},
    variant::{Variant, VariantOperations, VariantType},
};

pub type FunctionResult<T> = Result<T, FunctionError>;

/// A function that can be called from an expression.
///
/// Arguments arrive fully evaluated, in source order. Implementations convert
/// them with the supplied operations strategy, so the same function behaves
/// strictly or leniently depending on the calculator it runs in.
pub trait Function: Send + Sync {
    /// Returns the name the function is called by.
    fn name(&self) -> &str;

    /// Calculates the result for the given arguments.
    ///
    /// # Errors
    /// `WRONG_PARAM_COUNT` for an unsupported number of arguments,
    /// `INVALID_ARGUMENT` for arguments out of range, or the error of a
    /// failing variant operation.
    fn calculate(&self, params: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant>;
}

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any count listed in `slice`.
/// - `Range(min, max)` accepts `min..=max` arguments.
/// - `AtLeast(n)` accepts `n` or more arguments.
/// - `Any` accepts every count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    Range(usize, usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    /// Tests whether `count` arguments satisfy this arity.
    #[must_use]
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Self::Exact(n) => count == *n,
            Self::OneOf(counts) => counts.contains(&count),
            Self::Range(min, max) => (*min..=*max).contains(&count),
            Self::AtLeast(n) => count >= *n,
            Self::Any => true,
        }
    }

    /// Fails with `WRONG_PARAM_COUNT` unless `count` is accepted.
    ///
    /// # Example
    /// ```
    /// use formulary::calculator::function::Arity;
    ///
    /// assert!(Arity::OneOf(&[1, 3]).check(3).is_ok());
    ///
    /// let err = Arity::Exact(0).check(1).unwrap_err();
    /// assert_eq!(err.to_string(), "Expected 0 parameters but was found 1.");
    /// ```
    pub fn check(&self, count: usize) -> FunctionResult<()> {
        if self.accepts(count) {
            return Ok(());
        }
        Err(FunctionError::WrongParamCount { expected: self.to_string(),
                                             actual:   count, })
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::OneOf(counts) => {
                let Some((last, rest)) = counts.split_last() else {
                    return write!(f, "no");
                };
                if rest.is_empty() {
                    return write!(f, "{last}");
                }
                let rest = rest.iter().map(ToString::to_string).collect::<Vec<_>>();
                write!(f, "{} or {last}", rest.join(", "))
            },
            Self::Range(min, max) => write!(f, "from {min} to {max}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Any => write!(f, "any number of"),
        }
    }
}

type CalculateFn = dyn Fn(&[Variant], &dyn VariantOperations) -> FunctionResult<Variant> + Send + Sync;

/// A function backed by a closure.
///
/// The arity is checked before the closure runs, so the closure may index
/// its arguments freely.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::function::{Arity, DelegatedFunction, Function},
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let twice = DelegatedFunction::new("Twice", Arity::Exact(1), |args, ops| {
///     Ok(ops.add(&args[0], &args[0])?)
/// });
///
/// let ops = TypeUnsafeVariantOperations;
/// assert_eq!(twice.calculate(&[Variant::Integer(21)], &ops).unwrap(), Variant::Integer(42));
/// assert!(twice.calculate(&[], &ops).is_err());
/// ```
pub struct DelegatedFunction {
    name:      String,
    arity:     Arity,
    calculate: Box<CalculateFn>,
}

impl DelegatedFunction {
    pub fn new<F>(name: impl Into<String>, arity: Arity, calculate: F) -> Self
        where F: Fn(&[Variant], &dyn VariantOperations) -> FunctionResult<Variant> + Send + Sync + 'static
    {
        Self { name: name.into(),
               arity,
               calculate: Box::new(calculate) }
    }

    #[must_use]
    pub const fn arity(&self) -> Arity {
        self.arity
    }
}

impl Function for DelegatedFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate(&self, params: &[Variant], ops: &dyn VariantOperations) -> FunctionResult<Variant> {
        self.arity.check(params.len())?;
        (self.calculate)(params, ops)
    }
}

impl fmt::Debug for DelegatedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedFunction")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Converts an argument to `f64` with the operations strategy.
pub fn to_double(value: &Variant, ops: &dyn VariantOperations) -> FunctionResult<f64> {
    ops.convert(value, VariantType::Double)?
       .as_double()
       .ok_or_else(|| mismatch(value, VariantType::Double))
}

/// Converts an argument to `i64` with the operations strategy.
pub fn to_long(value: &Variant, ops: &dyn VariantOperations) -> FunctionResult<i64> {
    let converted = ops.convert(value, VariantType::Long)?;
    converted.as_long()
             .or_else(|| converted.as_integer().map(i64::from))
             .ok_or_else(|| mismatch(value, VariantType::Long))
}

/// Converts an argument to `i32` with the operations strategy.
pub fn to_integer(value: &Variant, ops: &dyn VariantOperations) -> FunctionResult<i32> {
    ops.convert(value, VariantType::Integer)?
       .as_integer()
       .ok_or_else(|| mismatch(value, VariantType::Integer))
}

/// Converts an argument to `bool` with the operations strategy.
pub fn to_boolean(value: &Variant, ops: &dyn VariantOperations) -> FunctionResult<bool> {
    ops.convert(value, VariantType::Boolean)?
       .as_boolean()
       .ok_or_else(|| mismatch(value, VariantType::Boolean))
}

/// Converts an argument to a UTC date-time with the operations strategy.
pub fn to_date_time(value: &Variant, ops: &dyn VariantOperations) -> FunctionResult<DateTime<Utc>> {
    ops.convert(value, VariantType::DateTime)?
       .as_date_time()
       .ok_or_else(|| mismatch(value, VariantType::DateTime))
}

/// Converts an argument to a string with the operations strategy.
pub fn to_text(value: &Variant, ops: &dyn VariantOperations) -> FunctionResult<String> {
    ops.convert(value, VariantType::String)?
       .as_str()
       .map(ToString::to_string)
       .ok_or_else(|| mismatch(value, VariantType::String))
}

/// Builds an `INVALID_ARGUMENT` error.
pub fn invalid_argument(details: impl Into<String>) -> FunctionError {
    FunctionError::InvalidArgument { details: details.into() }
}

fn mismatch(value: &Variant, to: VariantType) -> FunctionError {
    FunctionError::Operation(VariantError::UnsupportedConversion { from: value.variant_type(),
                                                                   to })
}
