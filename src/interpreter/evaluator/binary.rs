use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::exponent_to_u32_checked,
};

impl Context {
    /// Evaluates a binary operation given as tokens, `left op right`.
    ///
    /// The operator is checked first, then both operands are resolved, left
    /// before right. Nothing is mutated.
    ///
    /// # Errors
    /// - `RuntimeError::InvalidExpression` if `op` is not a binary operator.
    /// - `RuntimeError::UndefinedVariable` for the first operand that cannot
    ///   be resolved.
    /// - Any error of [`Context::eval_binary`].
    ///
    /// # Example
    /// ```
    /// use borg::{error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// let context = Context::new();
    ///
    /// assert_eq!(context.evaluate_binary("7", "+", "3"), Ok(10));
    /// assert_eq!(context.evaluate_binary("BORAMIR", "*", "2"),
    ///            Err(RuntimeError::UndefinedVariable { name: "BORAMIR".to_string() }));
    /// ```
    pub fn evaluate_binary(&self, left: &str, op: &str, right: &str) -> EvalResult<i64> {
        let op = op.parse::<BinaryOperator>()
                   .map_err(|()| RuntimeError::invalid(format!("'{op}' is not an operator")))?;
        let left = self.resolve(left)?;
        let right = self.resolve(right)?;
        Self::eval_binary(op, left, right)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// `+ - *` are checked integer arithmetic, `/` truncates toward zero, `%`
    /// is the remainder of truncating division (its sign follows the
    /// dividend) and `^` is delegated to [`Context::eval_pow`].
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` for `/` or `%` with a zero divisor.
    /// - `RuntimeError::Overflow` if the result does not fit in an `i64`.
    /// - `RuntimeError::NegativeExponent` for `^` with a negative exponent.
    ///
    /// # Example
    /// ```
    /// use borg::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Div, 7, 2), Ok(3));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, -7, 3), Ok(-1));
    /// assert_eq!(Context::eval_binary(BinaryOperator::Mod, 7, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};

        match op {
            Add => left.checked_add(right).ok_or(RuntimeError::Overflow),
            Sub => left.checked_sub(right).ok_or(RuntimeError::Overflow),
            Mul => left.checked_mul(right).ok_or(RuntimeError::Overflow),
            Div => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                left.checked_div(right).ok_or(RuntimeError::Overflow)
            },
            Mod => {
                if right == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                // i64::MIN % -1 is 0 mathematically; only the hardware
                // instruction overflows.
                Ok(left.wrapping_rem(right))
            },
            Pow => Self::eval_pow(left, right),
        }
    }

    /// Evaluates an exponentiation operation.
    ///
    /// Uses checked arithmetic. Bases `0`, `1` and `-1` are computed directly
    /// so that exponents beyond `u32::MAX` still give an answer for them.
    ///
    /// # Example
    /// ```
    /// use borg::{error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_pow(2, 5), Ok(32));
    /// assert_eq!(Context::eval_pow(7, 0), Ok(1));
    /// assert_eq!(Context::eval_pow(-1, i64::MAX), Ok(-1));
    /// assert_eq!(Context::eval_pow(2, 64), Err(RuntimeError::Overflow));
    /// assert_eq!(Context::eval_pow(2, -1),
    ///            Err(RuntimeError::NegativeExponent { exponent: -1 }));
    /// ```
    pub fn eval_pow(base: i64, exponent: i64) -> EvalResult<i64> {
        if exponent < 0 {
            return Err(RuntimeError::NegativeExponent { exponent });
        }

        match base {
            0 | 1 if exponent > 0 => Ok(base),
            -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
            _ => base.checked_pow(exponent_to_u32_checked(exponent)?)
                     .ok_or(RuntimeError::Overflow),
        }
    }
}
