use thiserror::Error;

use crate::error::{CalculationError, SyntaxError};

/// A failure to parse or evaluate an expression.
///
/// Every variant exposes the same structured view: a stable code, a
/// human readable message, and the position of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// The expression could not be parsed.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The parsed expression could not be evaluated.
    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

impl ExpressionError {
    /// Returns the stable error code, such as `VAR_NOT_FOUND`.
    ///
    /// # Example
    /// ```
    /// use formulary::evaluate;
    ///
    /// let err = evaluate("1 +").unwrap_err();
    /// assert_eq!(err.code(), "UNEXPECTED_END");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Syntax(e) => e.code(),
            Self::Calculation(e) => e.code(),
        }
    }

    /// Returns the human readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Syntax(e) => e.line(),
            Self::Calculation(e) => e.line(),
        }
    }

    /// Returns the column of the offending token.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Syntax(e) => e.column(),
            Self::Calculation(e) => e.column(),
        }
    }
}
