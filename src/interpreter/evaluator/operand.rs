use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{is_integer_shaped, parse_literal},
};

/// What an operand token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand<'a> {
    /// An integer literal such as `25`.
    Literal(i64),
    /// An integer-shaped token that does not fit in an `i64`.
    OutOfRange(&'a str),
    /// A variable reference such as `BORAMIR`.
    Variable(&'a str),
}

impl<'a> Operand<'a> {
    /// Classifies a token. Anything shaped like an integer is a literal, or
    /// out of range if it does not fit; everything else names a variable.
    ///
    /// ## Example
    /// ```
    /// use borg::interpreter::evaluator::operand::Operand;
    ///
    /// assert_eq!(Operand::classify("101"), Operand::Literal(101));
    /// assert_eq!(Operand::classify("LEGOLAS"), Operand::Variable("LEGOLAS"));
    /// assert_eq!(Operand::classify("99999999999999999999"),
    ///            Operand::OutOfRange("99999999999999999999"));
    /// ```
    #[must_use]
    pub fn classify(token: &'a str) -> Self {
        match parse_literal(token) {
            Some(value) => Self::Literal(value),
            None if is_integer_shaped(token) => Self::OutOfRange(token),
            None => Self::Variable(token),
        }
    }
}

impl Context {
    /// Resolves a token to its integer value.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedVariable` if the token is not a literal and no
    ///   variable of that name is bound.
    /// - `RuntimeError::Overflow` if the token is an integer too large for
    ///   `i64`.
    ///
    /// # Example
    /// ```
    /// use borg::{error::RuntimeError, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// context.define_in_scope("BORAMIR", 25);
    ///
    /// assert_eq!(context.resolve("7"), Ok(7));
    /// assert_eq!(context.resolve("BORAMIR"), Ok(25));
    /// assert_eq!(context.resolve("GANDALF"),
    ///            Err(RuntimeError::UndefinedVariable { name: "GANDALF".to_string() }));
    /// assert_eq!(context.resolve("-99999999999999999999"), Err(RuntimeError::Overflow));
    /// ```
    pub fn resolve(&self, token: &str) -> EvalResult<i64> {
        self.resolve_operand(Operand::classify(token))
    }

    pub(crate) fn resolve_operand(&self, operand: Operand<'_>) -> EvalResult<i64> {
        match operand {
            Operand::Literal(value) => Ok(value),
            Operand::OutOfRange(token) => {
                log::debug!("literal {token} does not fit in i64");
                Err(RuntimeError::Overflow)
            },
            Operand::Variable(name) => {
                self.symbols
                    .lookup(name)
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(), })
            },
        }
    }
}
