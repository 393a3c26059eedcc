/// Raw tokens and their kinds.
pub mod token;
/// Interval maps from character codes to values.
///
/// Used both for the dispatch table of a tokenizer and for the character
/// classes of individual states.
pub mod char_map;
/// Post-processing switches of a tokenizer.
pub mod options;
/// The traits implemented by tokenizer states.
pub mod state;
/// The reusable generic states.
///
/// Each state recognizes one class of tokens: words, numbers, quoted
/// strings, symbols, whitespace, or comments. Specialized tokenizers either
/// use them directly or wrap them.
pub mod states;
/// The tokenizer driver.
///
/// Dispatches on the first character of the remaining input, runs the
/// selected state, and applies the configured filters to the resulting
/// tokens.
pub mod core;
/// A general purpose tokenizer for plain text.
pub mod generic;
/// A tokenizer for comma separated values.
pub mod csv;

pub use self::{
    core::Tokenizer,
    csv::CsvOptions,
    options::TokenizerOptions,
    state::{QuoteState, StateRole, SymbolState, TokenizerState},
    token::{Token, TokenType},
};
