use thiserror::Error;

use crate::error::{FunctionError, VariantError};

/// Represents all errors that can occur while evaluating result tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Tried to use an undefined variable.
    #[error("Error on line {line}, column {column}: Variable {name} was not found.")]
    VariableNotFound {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Called an unknown function.
    #[error("Error on line {line}, column {column}: Function {name} was not found.")]
    FunctionNotFound {
        /// The name of the function.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A function failed to calculate its result.
    #[error("Error on line {line}, column {column}: Function {name} failed: {source}")]
    Function {
        /// The name of the function.
        name:   String,
        /// The underlying failure.
        source: FunctionError,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An operator could not be applied to its operands.
    #[error("Error on line {line}, column {column}: {source}")]
    Operation {
        /// The underlying failure.
        source: VariantError,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An instruction needed more operands than the stack held.
    #[error("Error on line {line}, column {column}: Calculation stack is empty.")]
    StackUnderflow {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The result token list was malformed.
    #[error("Error on line {line}, column {column}: Internal error: {details}.")]
    Internal {
        /// Details about the violated invariant.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl CalculationError {
    /// Returns the stable error code of this error.
    ///
    /// Wrapped function and operation failures report the code of their
    /// source.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::VariableNotFound { .. } => "VAR_NOT_FOUND",
            Self::FunctionNotFound { .. } => "FUNC_NOT_FOUND",
            Self::Function { source, .. } => source.code(),
            Self::Operation { source, .. } => source.code(),
            Self::StackUnderflow { .. } => "STACK_UNDERFLOW",
            Self::Internal { .. } => "INTERNAL",
        }
    }

    /// Returns the line of the failing token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::VariableNotFound { line, .. }
            | Self::FunctionNotFound { line, .. }
            | Self::Function { line, .. }
            | Self::Operation { line, .. }
            | Self::StackUnderflow { line, .. }
            | Self::Internal { line, .. } => *line,
        }
    }

    /// Returns the column of the failing token.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::VariableNotFound { column, .. }
            | Self::FunctionNotFound { column, .. }
            | Self::Function { column, .. }
            | Self::Operation { column, .. }
            | Self::StackUnderflow { column, .. }
            | Self::Internal { column, .. } => *column,
        }
    }
}
