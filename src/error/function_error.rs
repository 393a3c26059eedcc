use thiserror::Error;

use crate::error::VariantError;

/// Represents all errors a function can raise while calculating its result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    /// The wrong number of arguments was supplied to a function.
    #[error("Expected {expected} parameters but was found {actual}.")]
    WrongParamCount {
        /// Human readable form of the accepted argument counts.
        expected: String,
        /// The number of arguments that were supplied.
        actual:   usize,
    },
    /// An argument was invalid or out of range.
    #[error("Invalid argument: {details}.")]
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
    },
    /// A variant operation used by the function failed.
    #[error(transparent)]
    Operation(#[from] VariantError),
}

impl FunctionError {
    /// Returns the stable error code of this error.
    ///
    /// # Example
    /// ```
    /// use formulary::error::FunctionError;
    ///
    /// let err = FunctionError::WrongParamCount { expected: "0".into(),
    ///                                            actual:   1, };
    /// assert_eq!(err.code(), "WRONG_PARAM_COUNT");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::WrongParamCount { .. } => "WRONG_PARAM_COUNT",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Operation(source) => source.code(),
        }
    }
}
