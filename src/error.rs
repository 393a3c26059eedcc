/// Errors raised while tokenizing the input or configuring a tokenizer.
///
/// Tokenizing itself never fails. Unrecognized characters become `Unknown`
/// tokens, and it is up to the consumer to reject them. The errors here cover
/// invalid tokenizer setup, such as reversed character intervals or
/// conflicting CSV delimiters.
pub mod tokenizer_error;
/// Syntax errors.
///
/// Defines the errors raised by the expression parser while mapping raw tokens
/// to expression tokens and while running the precedence ladder. Each error
/// carries the line and column of the offending token.
pub mod syntax_error;
/// Errors raised by the operations strategy.
///
/// These errors describe failed conversions and operations on variant values.
/// They carry no position; the evaluator attaches one when it reports them.
pub mod variant_error;
/// Errors raised by callable functions.
///
/// Contains argument count mismatches, invalid arguments, and failures of the
/// variant operations a function delegates to.
pub mod function_error;
/// Calculation errors.
///
/// Contains all error types that can be raised while the evaluator walks the
/// result token list: missing variables or functions, failing operations, and
/// violations of the stack discipline.
pub mod calculation_error;
/// The error surfaced to users of the calculator.
///
/// Unifies syntax and calculation errors behind a single structured value with
/// a code, a message, and a position.
pub mod expression_error;

pub use calculation_error::CalculationError;
pub use expression_error::ExpressionError;
pub use function_error::FunctionError;
pub use syntax_error::SyntaxError;
pub use tokenizer_error::TokenizerError;
pub use variant_error::VariantError;
