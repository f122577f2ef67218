use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::evaluator::{
        core::{Context, EvalResult},
        operand::Operand,
    },
};

impl Context {
    /// Evaluates a unary operation given as tokens, in prefix position.
    ///
    /// This is the token-level entry point: `op` must be `++` or `--` and
    /// `operand` is resolved as a literal or variable. See
    /// [`Context::eval_prefix`] for the semantics.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidExpression` if `op` is not a unary operator.
    /// - `RuntimeError::UndefinedVariable` if `operand` cannot be resolved.
    /// - `RuntimeError::Overflow` if the result leaves the `i64` range.
    ///
    /// # Example
    /// ```
    /// use borg::interpreter::evaluator::core::Context;
    ///
    /// let mut context = Context::new();
    /// context.define_in_scope("N", 5);
    ///
    /// assert_eq!(context.evaluate_unary("++", "N"), Ok(6));
    /// assert_eq!(context.lookup("N"), Some(6));
    ///
    /// // Literals are not storage, so nothing is bound.
    /// assert_eq!(context.evaluate_unary("++", "5"), Ok(6));
    /// assert_eq!(context.lookup("5"), None);
    /// ```
    pub fn evaluate_unary(&mut self, op: &str, operand: &str) -> EvalResult<i64> {
        let op = op.parse::<UnaryOperator>()
                   .map_err(|()| RuntimeError::invalid(format!("'{op}' is not a unary operator")))?;
        self.eval_prefix(op, operand)
    }

    /// Applies `op` to `operand` and returns the new value.
    ///
    /// If `operand` names a variable, the variable is updated to the new
    /// value. A literal operand is left as it is.
    pub fn eval_prefix(&mut self, op: UnaryOperator, operand: &str) -> EvalResult<i64> {
        let operand = Operand::classify(operand);
        let value = self.resolve_operand(operand)?;
        let result = Self::eval_unary(op, value)?;

        if let Operand::Variable(name) = operand {
            self.symbols.assign(name, result);
        }
        Ok(result)
    }

    /// Applies `op` to `operand` and returns the value it had before.
    ///
    /// If `operand` names a variable, the variable is updated. A literal
    /// operand evaluates to itself.
    ///
    /// # Example
    /// ```
    /// use borg::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// context.define_in_scope("PEN", 32);
    ///
    /// assert_eq!(context.eval_postfix(UnaryOperator::Decrement, "PEN"), Ok(32));
    /// assert_eq!(context.lookup("PEN"), Some(31));
    /// assert_eq!(context.eval_postfix(UnaryOperator::Increment, "7"), Ok(7));
    /// ```
    pub fn eval_postfix(&mut self, op: UnaryOperator, operand: &str) -> EvalResult<i64> {
        let operand = Operand::classify(operand);
        let value = self.resolve_operand(operand)?;

        if let Operand::Variable(name) = operand {
            let result = Self::eval_unary(op, value)?;
            self.symbols.assign(name, result);
        }
        Ok(value)
    }

    /// Computes `value + 1` or `value - 1` with overflow checking.
    ///
    /// # Example
    /// ```
    /// use borg::{ast::UnaryOperator, error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Decrement, 0), Ok(-1));
    /// assert_eq!(Context::eval_unary(UnaryOperator::Increment, i64::MAX),
    ///            Err(RuntimeError::Overflow));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i64) -> EvalResult<i64> {
        let result = match op {
            UnaryOperator::Increment => value.checked_add(1),
            UnaryOperator::Decrement => value.checked_sub(1),
        };
        result.ok_or(RuntimeError::Overflow)
    }
}
