/// The calculator facade and the evaluation loop.
///
/// # Responsibilities
/// - Own an expression parser together with default variables, functions,
///   and the operations strategy.
/// - Walk result tokens against a fresh calculation stack.
/// - Attach the position of the failing token to every error.
pub mod core;

/// The calculation stack.
pub mod stack;

/// Operator dispatch.
///
/// Maps operator tokens to the methods of the operations strategy, and
/// implements the operators the strategy does not cover: null tests and
/// `LIKE` pattern matching.
pub mod operator;

pub use self::{
    core::{Calculator, EvalResult, evaluate},
    stack::CalculationStack,
};
