use tracing::{debug, trace};

use crate::{
    calculator::{
        evaluator::{operator::apply_operator, stack::CalculationStack},
        function::FunctionCollection,
        parser::{ExpressionParser, ParseResult},
        token::{ExpressionToken, ExpressionTokenType},
        variable::{Variable, VariableCollection},
    },
    error::CalculationError,
    tokenizer::Token,
    variant::{TypeUnsafeVariantOperations, Variant, VariantOperations},
};

pub type EvalResult<T> = Result<T, CalculationError>;

/// Evaluates result tokens.
///
/// This is the evaluation loop behind [`Calculator`]. It needs nothing but
/// the token list, so a parsed expression can be evaluated any number of
/// times, from any thread, each call with its own stack.
///
/// # Parameters
/// - `tokens`: Result tokens in evaluation order.
/// - `variables`: Values for the variables the expression refers to.
/// - `functions`: The functions the expression may call.
/// - `ops`: The operations strategy for operators and conversions.
///
/// # Returns
/// The single value left on the stack.
///
/// # Errors
/// - `VAR_NOT_FOUND` and `FUNC_NOT_FOUND` for unknown names.
/// - The error of a failing function or operation.
/// - `STACK_UNDERFLOW` and `INTERNAL` for malformed token lists.
///
/// # Example
/// ```
/// use formulary::{
///     calculator::{
///         evaluator::evaluate,
///         function::FunctionCollection,
///         parser::ExpressionParser,
///         variable::{Variable, VariableCollection},
///     },
///     variant::{TypeUnsafeVariantOperations, Variant},
/// };
///
/// let mut parser = ExpressionParser::new();
/// parser.parse_string("x * 2").unwrap();
///
/// let variables: VariableCollection = [Variable::new("x", 21)].into_iter().collect();
/// let result = evaluate(parser.result_tokens(),
///                       &variables,
///                       &FunctionCollection::new(),
///                       &TypeUnsafeVariantOperations).unwrap();
///
/// assert_eq!(result, Variant::Integer(42));
/// ```
pub fn evaluate(tokens: &[ExpressionToken],
                variables: &VariableCollection,
                functions: &FunctionCollection,
                ops: &dyn VariantOperations)
                -> EvalResult<Variant> {
    let mut stack = CalculationStack::new();

    for token in tokens {
        trace!(token = %token, depth = stack.len(), "evaluating");
        let outcome = match token.kind {
            ExpressionTokenType::Constant => {
                stack.push(token.value.clone());
                Ok(())
            },
            ExpressionTokenType::Variable => push_variable(token, &mut stack, variables),
            ExpressionTokenType::Function => call_function(token, &mut stack, functions, ops),
            _ => apply_operator(token, &mut stack, ops),
        };

        if let Err(err) = outcome {
            debug!(code = err.code(), line = err.line(), column = err.column(), "evaluation failed");
            return Err(err);
        }
    }

    match (stack.len(), tokens.last()) {
        (1, Some(last)) => stack.pop(last),
        (depth, last) => {
            let (line, column) = last.map_or((1, 0), |token| (token.line, token.column));
            Err(CalculationError::Internal { details: format!("{depth} values left on the stack"),
                                             line,
                                             column })
        },
    }
}

fn push_variable(token: &ExpressionToken,
                 stack: &mut CalculationStack,
                 variables: &VariableCollection)
                 -> EvalResult<()> {
    let variable = variables.find_by_name(token.name())
                            .ok_or_else(|| CalculationError::VariableNotFound { name:   token.name().to_string(),
                                                                                line:   token.line,
                                                                                column: token.column, })?;
    stack.push(variable.value.clone());
    Ok(())
}

/// Pops the argument count and the arguments, calls the function, and pushes
/// its result.
fn call_function(token: &ExpressionToken,
                 stack: &mut CalculationStack,
                 functions: &FunctionCollection,
                 ops: &dyn VariantOperations)
                 -> EvalResult<()> {
    let count = stack.pop(token)?;
    let count = count.as_integer()
                     .and_then(|count| usize::try_from(count).ok())
                     .ok_or_else(|| CalculationError::Internal { details: format!("invalid argument count {count}"),
                                                                 line:    token.line,
                                                                 column:  token.column, })?;

    let mut args = Vec::with_capacity(count);
    for _ in 0..count {
        args.push(stack.pop(token)?);
    }
    args.reverse();

    let name = token.name();
    let function = functions.find_by_name(name)
                            .ok_or_else(|| CalculationError::FunctionNotFound { name:   name.to_string(),
                                                                                line:   token.line,
                                                                                column: token.column, })?;

    let result = function.calculate(&args, ops)
                         .map_err(|source| CalculationError::Function { name: name.to_string(),
                                                                        source,
                                                                        line: token.line,
                                                                        column: token.column })?;
    stack.push(result);
    Ok(())
}

/// The expression engine.
///
/// A calculator parses one expression at a time and evaluates it against
/// variables and functions. It keeps default collections for both, used
/// whenever an evaluation does not supply its own, and an operations
/// strategy that defines how operators treat mixed types.
///
/// With auto variables on (the default), setting an expression adds a
/// `Null` variable to the default variables for every name the expression
/// uses that is not defined yet.
///
/// # Example
/// ```
/// use formulary::{calculator::Calculator, variant::Variant};
///
/// let mut calculator = Calculator::with_expression("A + b / (3 - Max(-123, 1) * 2)").unwrap();
/// assert_eq!(calculator.variable_names(), ["A", "b"]);
///
/// let variables = calculator.default_variables_mut();
/// variables.locate("A").set_value("xyz");
/// variables.locate("b").set_value(123);
///
/// assert_eq!(calculator.evaluate().unwrap(), Variant::from("xyz123"));
/// ```
pub struct Calculator {
    parser:             ExpressionParser,
    default_variables:  VariableCollection,
    default_functions:  FunctionCollection,
    variant_operations: Box<dyn VariantOperations>,
    auto_variables:     bool,
}

impl Calculator {
    /// Creates a calculator with no expression, no variables, the default
    /// function library and the coercing operations strategy.
    #[must_use]
    pub fn new() -> Self {
        Self { parser:             ExpressionParser::new(),
               default_variables:  VariableCollection::new(),
               default_functions:  FunctionCollection::with_defaults(),
               variant_operations: Box::new(TypeUnsafeVariantOperations),
               auto_variables:     true, }
    }

    /// Creates a calculator and parses `expression`.
    pub fn with_expression(expression: &str) -> ParseResult<Self> {
        let mut calculator = Self::new();
        calculator.set_expression(expression)?;
        Ok(calculator)
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        self.parser.expression()
    }

    /// Parses a new expression.
    ///
    /// # Errors
    /// The syntax error of the expression. The previous expression is
    /// discarded either way.
    pub fn set_expression(&mut self, expression: &str) -> ParseResult<()> {
        self.parser.parse_string(expression)?;
        self.discover_variables();
        Ok(())
    }

    /// Parses an expression that was tokenized elsewhere.
    ///
    /// # Errors
    /// The syntax error of the tokens.
    pub fn set_tokens(&mut self, tokens: &[Token]) -> ParseResult<()> {
        self.parser.parse_tokens(tokens)?;
        self.discover_variables();
        Ok(())
    }

    #[must_use]
    pub fn original_tokens(&self) -> &[Token] {
        self.parser.original_tokens()
    }

    #[must_use]
    pub fn initial_tokens(&self) -> &[ExpressionToken] {
        self.parser.initial_tokens()
    }

    #[must_use]
    pub fn result_tokens(&self) -> &[ExpressionToken] {
        self.parser.result_tokens()
    }

    #[must_use]
    pub fn variable_names(&self) -> &[String] {
        self.parser.variable_names()
    }

    #[must_use]
    pub const fn default_variables(&self) -> &VariableCollection {
        &self.default_variables
    }

    pub const fn default_variables_mut(&mut self) -> &mut VariableCollection {
        &mut self.default_variables
    }

    #[must_use]
    pub const fn default_functions(&self) -> &FunctionCollection {
        &self.default_functions
    }

    pub const fn default_functions_mut(&mut self) -> &mut FunctionCollection {
        &mut self.default_functions
    }

    #[must_use]
    pub fn variant_operations(&self) -> &dyn VariantOperations {
        self.variant_operations.as_ref()
    }

    pub fn set_variant_operations(&mut self, ops: impl VariantOperations + 'static) {
        self.variant_operations = Box::new(ops);
    }

    #[must_use]
    pub const fn auto_variables(&self) -> bool {
        self.auto_variables
    }

    pub const fn set_auto_variables(&mut self, value: bool) {
        self.auto_variables = value;
    }

    /// Adds a `Null` variable to `variables` for every name the expression
    /// uses that `variables` does not define. Existing values are kept.
    pub fn create_variables(&self, variables: &mut VariableCollection) {
        add_missing(self.parser.variable_names(), variables);
    }

    /// Forgets the expression and the default variables.
    pub fn clear(&mut self) {
        self.parser.clear();
        self.default_variables.clear();
    }

    /// Evaluates the expression with the default variables and functions.
    pub fn evaluate(&self) -> EvalResult<Variant> {
        self.evaluate_with_variables_and_functions(None, None)
    }

    /// Evaluates the expression with `variables`, or the defaults if `None`.
    pub fn evaluate_with_variables(&self, variables: Option<&VariableCollection>) -> EvalResult<Variant> {
        self.evaluate_with_variables_and_functions(variables, None)
    }

    /// Evaluates the expression with the given collections, falling back to
    /// the defaults for each one that is `None`.
    pub fn evaluate_with_variables_and_functions(&self,
                                                 variables: Option<&VariableCollection>,
                                                 functions: Option<&FunctionCollection>)
                                                 -> EvalResult<Variant> {
        evaluate(self.parser.result_tokens(),
                 variables.unwrap_or(&self.default_variables),
                 functions.unwrap_or(&self.default_functions),
                 self.variant_operations.as_ref())
    }

    fn discover_variables(&mut self) {
        if self.auto_variables {
            add_missing(self.parser.variable_names(), &mut self.default_variables);
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
         .field("expression", &self.parser.expression())
         .field("default_variables", &self.default_variables)
         .field("auto_variables", &self.auto_variables)
         .finish_non_exhaustive()
    }
}

fn add_missing(names: &[String], variables: &mut VariableCollection) {
    let missing: Vec<&String> = names.iter()
                                     .filter(|name| variables.find_by_name(name).is_none())
                                     .collect();
    if missing.is_empty() {
        return;
    }

    debug!(variables = ?missing, "creating variables");
    for name in missing {
        variables.add(Variable::named(name.as_str()));
    }
}
