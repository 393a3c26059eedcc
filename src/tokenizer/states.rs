/// Multi-character operator recognition through a symbol trie.
pub mod symbol;
/// Decimal number recognition.
pub mod number;
/// Quoted string recognition, encoding, and decoding.
pub mod quote;
/// Whitespace runs.
pub mod whitespace;
/// Identifiers and plain words.
pub mod word;
/// Line and block comments.
pub mod comment;

pub use comment::{CppCommentState, GenericCommentState};
pub use number::GenericNumberState;
pub use quote::GenericQuoteState;
pub use symbol::GenericSymbolState;
pub use whitespace::GenericWhitespaceState;
pub use word::GenericWordState;
