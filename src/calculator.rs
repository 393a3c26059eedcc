/// Expression tokens and their kinds.
///
/// The parser maps raw tokens to expression tokens, which carry a variant
/// value instead of text.
pub mod token;

/// The expression tokenizer and its states.
///
/// Recognizes numbers with exponents and hex literals, identifiers and
/// keywords, single quoted strings, double quoted identifiers, and C style
/// comments.
pub mod lexer;

/// The expression parser.
///
/// # Responsibilities
/// - Tokenize the source and map raw tokens to expression tokens.
/// - Check the syntax with a fixed precedence ladder.
/// - Emit result tokens in reverse Polish order, ready to evaluate.
/// - Collect the names of the variables the expression uses.
pub mod parser;

/// Variables and the variable collection.
pub mod variable;

/// Callable functions, the function collection, and the default library.
pub mod function;

/// The evaluator and the calculator facade.
///
/// Evaluates result tokens on a stack, looking up variables and functions by
/// name and delegating operators to an operations strategy.
pub mod evaluator;

pub use self::{
    evaluator::{Calculator, EvalResult},
    function::{Function, FunctionCollection},
    parser::ExpressionParser,
    token::{ExpressionToken, ExpressionTokenType},
    variable::{Variable, VariableCollection},
};
