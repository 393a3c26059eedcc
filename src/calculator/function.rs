/// The function trait, its closure adapter, and argument helpers.
///
/// # Responsibilities
/// - Define the `Function` interface the evaluator calls.
/// - Describe accepted argument counts with `Arity`.
/// - Convert arguments through the active operations strategy.
pub mod core;

/// The function collection and the default library table.
///
/// Lookup is case-insensitive and returns the first function registered under
/// a name.
pub mod collection;

/// Mathematical functions and constants.
pub mod math;

/// Date, time and time span functions.
///
/// All dates are in UTC. Numbers stand for milliseconds since the Unix epoch
/// or, for time spans, milliseconds.
pub mod date;

/// Aggregates and conditional selection: `Min`, `Max`, `Sum`, `If`, `Choose`.
pub mod aggregate;

/// Arrays, emptiness and containment tests.
pub mod misc;

pub use self::{
    collection::{BUILTIN_FUNCTIONS, FunctionCollection},
    core::{Arity, DelegatedFunction, Function, FunctionResult},
};
