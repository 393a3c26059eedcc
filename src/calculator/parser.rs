/// The parser object and its token cursor.
///
/// Owns the source text and every list derived from it, and drives the
/// lexical and syntax passes.
pub mod core;

/// Lexical analysis.
///
/// Maps raw tokens from the expression tokenizer to expression tokens:
/// literals become constants, words become variables, and symbols and
/// keywords are looked up in the operator table.
pub mod lexical;

/// Binary operator levels of the precedence ladder.
///
/// Implements levels 0 through 5, from logical connectives down to powers,
/// membership, and shifts. Each level emits its operator after both operands.
pub mod binary;

/// Primary expressions.
///
/// Handles unary signs, constants, variables, function calls, parenthesized
/// groups, and element access.
pub mod unary;

pub use self::core::{ExpressionParser, ParseResult};
