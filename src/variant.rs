/// The type tags of variant values.
pub mod variant_type;
/// The `Variant` tagged union.
///
/// A variant is the single value type of the calculator: constants,
/// variables, function arguments, and results are all variants. The type
/// itself is deliberately thin. All behavior that involves more than one
/// variant, or a change of type, lives in an operations strategy.
pub mod core;
/// The operations strategy trait.
///
/// Implements arithmetic, logical, comparison, membership, and indexing
/// operators in terms of a single required `convert` method, so strategies
/// differ only in which conversions they allow.
pub mod operations;
/// The coercing operations strategy.
///
/// Converts freely between strings, numbers, booleans, and dates whenever the
/// conversion is unambiguous.
pub mod type_unsafe;
/// The strict operations strategy.
///
/// Only allows lossless widening between numeric types.
pub mod type_safe;

pub use self::{
    core::Variant,
    operations::{OperationResult, VariantOperations},
    type_safe::TypeSafeVariantOperations,
    type_unsafe::TypeUnsafeVariantOperations,
    variant_type::VariantType,
};
