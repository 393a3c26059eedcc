use std::fmt;

use crate::calculator::{
    function::{
        aggregate,
        core::{Arity, DelegatedFunction, Function},
        date, math, misc,
    },
    variable::same_name,
};

/// Defines the default library as a table of names, arities and handlers.
///
/// Each entry provides:
/// - a string name,
/// - its accepted arity,
/// - a function implementing the builtin.
///
/// The macro produces:
/// - `BUILTIN_FUNCTIONS` (public list of builtin names),
/// - `builtin_table` (the functions, wrapped as [`DelegatedFunction`]s).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Names of the default functions, in registration order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        fn builtin_table() -> Vec<DelegatedFunction> {
            vec![
                $(
                    DelegatedFunction::new($name, $arity, $func),
                )*
            ]
        }
    };
}

builtin_functions! {
    "Ticks"     => { arity: Arity::Exact(0), func: date::ticks },
    "TimeSpan"  => { arity: Arity::OneOf(&[1, 3, 4, 5]), func: date::time_span },
    "Now"       => { arity: Arity::Exact(0), func: date::now },
    "Date"      => { arity: Arity::Range(1, 7), func: date::date },
    "DayOfWeek" => { arity: Arity::Exact(1), func: date::day_of_week },
    "Year"      => { arity: Arity::Exact(1), func: date::year },
    "Month"     => { arity: Arity::Exact(1), func: date::month },
    "Day"       => { arity: Arity::Exact(1), func: date::day },
    "Hour"      => { arity: Arity::Exact(1), func: date::hour },
    "Minute"    => { arity: Arity::Exact(1), func: date::minute },
    "Second"    => { arity: Arity::Exact(1), func: date::second },
    "Min"       => { arity: Arity::AtLeast(2), func: aggregate::min },
    "Max"       => { arity: Arity::AtLeast(2), func: aggregate::max },
    "Sum"       => { arity: Arity::AtLeast(2), func: aggregate::sum },
    "If"        => { arity: Arity::Exact(3), func: aggregate::if_ },
    "Choose"    => { arity: Arity::AtLeast(3), func: aggregate::choose },
    "E"         => { arity: Arity::Exact(0), func: math::e },
    "Pi"        => { arity: Arity::Exact(0), func: math::pi },
    "Rnd"       => { arity: Arity::Exact(0), func: math::random },
    "Random"    => { arity: Arity::Exact(0), func: math::random },
    "Abs"       => { arity: Arity::Exact(1), func: math::abs },
    "Acos"      => { arity: Arity::Exact(1), func: math::acos },
    "Asin"      => { arity: Arity::Exact(1), func: math::asin },
    "Atan"      => { arity: Arity::Exact(1), func: math::atan },
    "Exp"       => { arity: Arity::Exact(1), func: math::exp },
    "Log"       => { arity: Arity::Exact(1), func: math::ln },
    "Ln"        => { arity: Arity::Exact(1), func: math::ln },
    "Log10"     => { arity: Arity::Exact(1), func: math::log10 },
    "Ceil"      => { arity: Arity::Exact(1), func: math::ceil },
    "Ceiling"   => { arity: Arity::Exact(1), func: math::ceil },
    "Floor"     => { arity: Arity::Exact(1), func: math::floor },
    "Round"     => { arity: Arity::Exact(1), func: math::round },
    "Trunc"     => { arity: Arity::Exact(1), func: math::trunc },
    "Truncate"  => { arity: Arity::Exact(1), func: math::trunc },
    "Cos"       => { arity: Arity::Exact(1), func: math::cos },
    "Sin"       => { arity: Arity::Exact(1), func: math::sin },
    "Tan"       => { arity: Arity::Exact(1), func: math::tan },
    "Sqr"       => { arity: Arity::Exact(1), func: math::sqr },
    "Sqrt"      => { arity: Arity::Exact(1), func: math::sqrt },
    "Empty"     => { arity: Arity::Exact(1), func: misc::empty },
    "Null"      => { arity: Arity::Exact(0), func: misc::null },
    "Contains"  => { arity: Arity::Exact(2), func: misc::contains },
    "Array"     => { arity: Arity::Any, func: misc::array },
}

/// An ordered list of functions with case-insensitive lookup.
///
/// Names need not be unique. Lookup returns the first function registered
/// under a name, so adding a function never shadows an existing one.
///
/// # Example
/// ```
/// use formulary::calculator::function::FunctionCollection;
///
/// let functions = FunctionCollection::with_defaults();
/// assert!(functions.find_by_name("sqrt").is_some());
/// assert!(functions.find_by_name("Undefined").is_none());
/// ```
#[derive(Default)]
pub struct FunctionCollection {
    functions: Vec<Box<dyn Function>>,
}

impl FunctionCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding the default library.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut collection = Self::new();
        for function in builtin_table() {
            collection.add(function);
        }
        collection
    }

    /// Appends a function.
    pub fn add(&mut self, function: impl Function + 'static) {
        self.functions.push(Box::new(function));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&dyn Function> {
        self.functions.get(index).map(AsRef::as_ref)
    }

    #[must_use]
    pub fn get_all(&self) -> &[Box<dyn Function>] {
        &self.functions
    }

    /// Returns the index of the first function called `name`, ignoring case.
    #[must_use]
    pub fn find_index_by_name(&self, name: &str) -> Option<usize> {
        self.functions
            .iter()
            .position(|function| same_name(function.name(), name))
    }

    /// Returns the first function called `name`, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&dyn Function> {
        self.find_index_by_name(name).and_then(|index| self.get(index))
    }

    /// Removes and returns the function at `index`.
    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Function>> {
        (index < self.functions.len()).then(|| self.functions.remove(index))
    }

    /// Removes and returns the first function called `name`.
    pub fn remove_by_name(&mut self, name: &str) -> Option<Box<dyn Function>> {
        self.find_index_by_name(name).and_then(|index| self.remove(index))
    }

    pub fn clear(&mut self) {
        self.functions.clear();
    }
}

impl fmt::Debug for FunctionCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
         .entries(self.functions.iter().map(|function| function.name()))
         .finish()
    }
}
