use thiserror::Error;

use crate::variant::VariantType;

/// Represents all errors that can occur while operating on variant values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    /// The operation is not defined for the given operand types.
    #[error("Operation '{operation}' is not supported for {operands}.")]
    UnsupportedOperation {
        /// Name of the operation.
        operation: &'static str,
        /// Description of the operand types.
        operands:  String,
    },
    /// The strategy does not allow converting between the two types.
    #[error("Conversion from {from} to {to} is not supported.")]
    UnsupportedConversion {
        /// The type of the value.
        from: VariantType,
        /// The requested type.
        to:   VariantType,
    },
    /// The conversion is allowed, but this value cannot be represented.
    #[error("Value '{value}' cannot be converted to {to}.")]
    ConversionFailed {
        /// Textual form of the value.
        value: String,
        /// The requested type.
        to:    VariantType,
    },
    /// Attempted integer division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Tried to access an element outside the allowed bounds.
    #[error("Index {index} is out of range for length {length}.")]
    IndexOutOfRange {
        /// The requested index.
        index:  i64,
        /// Length of the indexed value.
        length: usize,
    },
    /// An operand was of the right type but had an invalid value.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
}

impl VariantError {
    /// Returns the stable error code of this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedOperation { .. } => "UNSUPPORTED_OPERATION",
            Self::UnsupportedConversion { .. } => "UNSUPPORTED_CONVERSION",
            Self::ConversionFailed { .. } => "CONVERSION_FAILED",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}
