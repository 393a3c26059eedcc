use crate::{
    error::VariantError,
    util::num::{i64_to_f32_checked, i64_to_f64_checked},
    variant::{OperationResult, Variant, VariantOperations, VariantType},
};

/// An operations strategy that only performs lossless numeric widening.
///
/// Allowed conversions are `Integer` to `Long` or `Double`, `Float` to
/// `Double`, and `Integer` or `Long` to `Float` or `Double` when the value is
/// exactly representable. `Null` stays `Null`. Any other conversion fails, so
/// operators reject mixed operands such as a string and a number.
///
/// # Example
/// ```
/// use formulary::variant::{TypeSafeVariantOperations, Variant, VariantOperations};
///
/// let ops = TypeSafeVariantOperations;
///
/// assert_eq!(ops.add(&Variant::Integer(1), &Variant::Double(0.5)).unwrap(),
///            Variant::Double(1.5));
/// assert!(ops.add(&"1".into(), &Variant::Integer(1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeSafeVariantOperations;

impl VariantOperations for TypeSafeVariantOperations {
    fn convert(&self, value: &Variant, target: VariantType) -> OperationResult<Variant> {
        if value.variant_type() == target || value.is_null() {
            return Ok(value.clone());
        }

        let inexact = || VariantError::ConversionFailed { value: value.to_string(),
                                                          to:    target, };

        match (value, target) {
            (Variant::Integer(v), VariantType::Long) => Ok(Variant::Long(i64::from(*v))),
            (Variant::Integer(v), VariantType::Float) => {
                i64_to_f32_checked(i64::from(*v), inexact()).map(Variant::Float)
            },
            (Variant::Integer(v), VariantType::Double) => Ok(Variant::Double(f64::from(*v))),
            (Variant::Long(v), VariantType::Float) => {
                i64_to_f32_checked(*v, inexact()).map(Variant::Float)
            },
            (Variant::Long(v), VariantType::Double) => i64_to_f64_checked(*v, inexact()).map(Variant::Double),
            (Variant::Float(v), VariantType::Double) => Ok(Variant::Double(f64::from(*v))),
            _ => Err(VariantError::UnsupportedConversion { from: value.variant_type(),
                                                           to:   target, }),
        }
    }
}
