use crate::{
    calculator::{evaluator::core::EvalResult, token::ExpressionToken},
    error::CalculationError,
    variant::Variant,
};

/// The operand stack of one evaluation.
///
/// Popping or peeking an empty stack is a `STACK_UNDERFLOW` error reported at
/// the token that needed the operand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculationStack {
    values: Vec<Variant>,
}

impl CalculationStack {
    #[must_use]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn push(&mut self, value: Variant) {
        self.values.push(value);
    }

    /// Removes the top value.
    ///
    /// # Errors
    /// `STACK_UNDERFLOW` at the position of `token` if the stack is empty.
    pub fn pop(&mut self, token: &ExpressionToken) -> EvalResult<Variant> {
        self.values.pop().ok_or_else(|| underflow(token))
    }

    /// Returns the top value without removing it.
    ///
    /// # Errors
    /// `STACK_UNDERFLOW` at the position of `token` if the stack is empty.
    pub fn peek(&self, token: &ExpressionToken) -> EvalResult<&Variant> {
        self.values.last().ok_or_else(|| underflow(token))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

const fn underflow(token: &ExpressionToken) -> CalculationError {
    CalculationError::StackUnderflow { line:   token.line,
                                       column: token.column, }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::token::ExpressionTokenType;

    #[test]
    fn underflow_reports_the_token_position() {
        let token = ExpressionToken::operator(ExpressionTokenType::Plus, 2, 7);
        let mut stack = CalculationStack::new();

        stack.push(Variant::Integer(1));
        assert_eq!(stack.peek(&token), Ok(&Variant::Integer(1)));
        assert_eq!(stack.pop(&token), Ok(Variant::Integer(1)));

        let err = stack.pop(&token).unwrap_err();
        assert_eq!(err.code(), "STACK_UNDERFLOW");
        assert_eq!((err.line(), err.column()), (2, 7));
    }
}
