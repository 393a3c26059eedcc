use thiserror::Error;

/// Represents all errors that can occur while setting up a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// A character interval was given with its bounds reversed.
    #[error("Invalid character interval: start {start:?} is greater than end {end:?}.")]
    InvalidInterval {
        /// The first character of the interval.
        start: char,
        /// The last character of the interval.
        end:   char,
    },
    /// CSV field separators or quote characters are not usable.
    #[error("Invalid CSV options: {details}.")]
    InvalidCsvOptions {
        /// Details describing the conflict.
        details: String,
    },
}
