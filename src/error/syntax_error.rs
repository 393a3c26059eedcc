use thiserror::Error;

/// Represents all errors that can occur while parsing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A raw token has no meaning in an expression.
    #[error("Error on line {line}, column {column}: Unknown symbol {symbol}.")]
    UnknownSymbol {
        /// The text of the token.
        symbol: String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// The expression ended where an operand was required.
    #[error("Error on line {line}, column {column}: Unexpected end of expression.")]
    UnexpectedEnd {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Tokens remained after a complete expression was parsed.
    #[error("Error on line {line}, column {column}: Syntax error near {token}.")]
    ErrorNear {
        /// The first unconsumed token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A token cannot start an operand.
    #[error("Error on line {line}, column {column}: Syntax error at {token}.")]
    ErrorAt {
        /// The offending token.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}, column {column}: Missing closing parenthesis.")]
    MissedCloseParenthesis {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A closing square bracket `]` was expected but not found.
    #[error("Error on line {line}, column {column}: Missing closing square bracket.")]
    MissedCloseSquareBracket {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Groups, calls, or unary operators were nested too deeply.
    #[error("Error on line {line}, column {column}: Expression is nested deeper than {limit} levels.")]
    NestingTooDeep {
        /// The maximum supported depth.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl SyntaxError {
    /// Returns the stable error code of this error.
    ///
    /// # Example
    /// ```
    /// use formulary::error::SyntaxError;
    ///
    /// let err = SyntaxError::UnexpectedEnd { line: 1, column: 4 };
    /// assert_eq!(err.code(), "UNEXPECTED_END");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownSymbol { .. } => "UNKNOWN_SYMBOL",
            Self::UnexpectedEnd { .. } => "UNEXPECTED_END",
            Self::ErrorNear { .. } => "ERROR_NEAR",
            Self::ErrorAt { .. } => "ERROR_AT",
            Self::MissedCloseParenthesis { .. } => "MISSED_CLOSE_PARENTHESIS",
            Self::MissedCloseSquareBracket { .. } => "MISSED_CLOSE_SQUARE_BRACKET",
            Self::NestingTooDeep { .. } => "NESTING_TOO_DEEP",
        }
    }

    /// Returns the line of the offending token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownSymbol { line, .. }
            | Self::UnexpectedEnd { line, .. }
            | Self::ErrorNear { line, .. }
            | Self::ErrorAt { line, .. }
            | Self::MissedCloseParenthesis { line, .. }
            | Self::MissedCloseSquareBracket { line, .. }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }

    /// Returns the column of the offending token.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnknownSymbol { column, .. }
            | Self::UnexpectedEnd { column, .. }
            | Self::ErrorNear { column, .. }
            | Self::ErrorAt { column, .. }
            | Self::MissedCloseParenthesis { column, .. }
            | Self::MissedCloseSquareBracket { column, .. }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}
