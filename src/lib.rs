//! # formulary
//!
//! formulary is an expression engine written in Rust.
//! It tokenizes textual formulas, compiles them to a flat instruction list in
//! reverse Polish order, and evaluates that list against variables and
//! functions, producing a dynamically typed value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{calculator::Calculator, error::ExpressionError, variant::Variant};

/// Provides unified error types for tokenizing, parsing and evaluation.
///
/// This module defines all errors that can be raised while configuring a
/// tokenizer, parsing an expression, or evaluating it. Position-free errors
/// describe failing value operations and functions; the parser and the
/// evaluator attach the line and column of the offending token.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser,
///   evaluator, functions, variant operations).
/// - Exposes a stable code for every error, such as `VAR_NOT_FOUND`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Character input with position tracking.
///
/// Provides the scanner abstraction that tokenizers read from, with lookahead,
/// bounded unread, and line and column reporting.
pub mod io;
/// A configurable, table driven tokenizer framework.
///
/// This module turns text into raw tokens. A character map selects a state
/// for the first character of each token, and the state reads the rest.
///
/// # Responsibilities
/// - Defines raw tokens, the state traits, and tokenizer options.
/// - Provides reusable states for words, numbers, quotes, symbols,
///   whitespace, and comments.
/// - Ships ready-made tokenizers for generic text and CSV.
pub mod tokenizer;
/// Dynamically typed values and the operations defined on them.
///
/// # Responsibilities
/// - Defines the `Variant` tagged union and its type tags.
/// - Defines the operations strategy trait, with a coercing and a strict
///   implementation.
/// - Keeps numeric arithmetic widening only, so values never wrap.
pub mod variant;
/// The expression engine.
///
/// This module ties together the expression tokenizer, the parser, the
/// evaluator, and the variable and function collections.
///
/// # Responsibilities
/// - Compiles expressions to result tokens in reverse Polish order.
/// - Evaluates result tokens against variables and functions.
/// - Provides the default function library.
pub mod calculator;
/// General utilities for safe numeric conversion.
///
/// This module provides conversion routines between the numeric payloads of
/// variants. Narrowing conversions report failure instead of truncating
/// silently.
pub mod util;

/// Parses and evaluates an expression in one step.
///
/// Uses a fresh [`Calculator`] with the default function library and the
/// coercing operations strategy. Variables the expression refers to are
/// `Null`.
///
/// # Errors
/// Returns the syntax error or calculation error, with its code and position.
///
/// # Examples
/// ```
/// use formulary::{evaluate, variant::Variant};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), Variant::Integer(14));
/// assert_eq!(evaluate("'abc'[1]").unwrap(), Variant::from("b"));
///
/// let err = evaluate("XXX(1)").unwrap_err();
/// assert_eq!(err.code(), "FUNC_NOT_FOUND");
/// ```
pub fn evaluate(source: &str) -> Result<Variant, ExpressionError> {
    let calculator = Calculator::with_expression(source)?;
    Ok(calculator.evaluate()?)
}
