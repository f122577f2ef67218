#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// None of these are fatal: the interpreter reports them as a diagnostic line
/// and moves on to the next command with the symbol table untouched.
pub enum RuntimeError {
    /// An operand is neither an integer literal nor a bound variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The divisor of `/` or `%` was zero.
    DivisionByZero,
    /// The tokens do not form any supported expression.
    InvalidExpression {
        /// Details describing what was wrong with the expression.
        details: String,
    },
    /// `START` was issued while already at the configured nesting limit.
    MaxScopeDepthExceeded {
        /// The configured maximum nesting depth.
        max: usize,
    },
    /// Arithmetic overflowed the 64-bit integer range.
    Overflow,
    /// `^` was given a negative exponent.
    NegativeExponent {
        /// The exponent that was supplied.
        exponent: i64,
    },
}

impl RuntimeError {
    /// Builds an [`RuntimeError::InvalidExpression`] from anything printable.
    ///
    /// ## Example
    /// ```
    /// use borg::error::RuntimeError;
    ///
    /// let err = RuntimeError::invalid("'X' is not an operator");
    /// assert_eq!(err.to_string(), "Invalid expression: 'X' is not an operator");
    /// ```
    pub fn invalid(details: impl Into<String>) -> Self {
        Self::InvalidExpression { details: details.into(), }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "{name} IS UNDEFINED"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::InvalidExpression { details } => write!(f, "Invalid expression: {details}"),
            Self::MaxScopeDepthExceeded { max } => {
                write!(f, "Cannot START: scope depth limit of {max} reached")
            },
            Self::Overflow => write!(f, "Integer overflow while trying to compute result"),
            Self::NegativeExponent { exponent } => {
                write!(f, "Negative exponent {exponent} is not supported")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
