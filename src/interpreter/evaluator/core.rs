use crate::{
    ast::Expr,
    config::Config,
    error::RuntimeError,
    interpreter::{scope::ScopeStack, symbol_table::SymbolTable},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the symbol table with every
/// visible variable, and the stack of scopes that decides which of those
/// variables disappear on `FINISH`. Evaluation itself is stateless; every
/// result is a function of the table's contents at the time of the call.
///
/// ## Usage
///
/// `Context` is created once and reused for every command of a program.
///
/// ```
/// use borg::interpreter::evaluator::core::Context;
///
/// let mut context = Context::new();
/// context.define_in_scope("BORAMIR", 25);
///
/// assert_eq!(context.evaluate_binary("BORAMIR", "*", "2"), Ok(50));
/// ```
#[derive(Debug, Clone)]
pub struct Context {
    /// Every currently visible binding.
    pub symbols:       SymbolTable,
    /// The active scopes, global scope at the bottom.
    pub scopes:        ScopeStack,
    /// Whether a `START` past the depth limit is reported as an error.
    pub strict_scopes: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with the default [`Config`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates an empty context using the given settings.
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        Self { symbols:       SymbolTable::with_buckets(config.buckets),
               scopes:        ScopeStack::new(config.max_depth),
               strict_scopes: config.strict_scopes, }
    }

    /// Returns the current scope nesting depth (0 at global scope).
    #[must_use]
    pub fn scope_depth(&self) -> usize {
        self.scopes.depth()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.symbols.lookup(name)
    }

    /// Defines `name` and records it in the innermost scope.
    ///
    /// This is what a successful `VAR` does. An existing binding for `name`
    /// is overwritten in place, even if it was introduced by an outer scope.
    pub fn define_in_scope(&mut self, name: &str, value: i64) {
        self.symbols.define(name, value);
        self.scopes.record(name);
    }

    /// Opens a nested scope and returns the resulting depth.
    ///
    /// At the depth limit the behaviour depends on `strict_scopes`: strict
    /// contexts report the error, others log a warning and stay at the
    /// current depth.
    ///
    /// # Errors
    /// `RuntimeError::MaxScopeDepthExceeded` in strict mode.
    pub fn enter_scope(&mut self) -> EvalResult<usize> {
        match self.scopes.enter_scope() {
            Err(e @ RuntimeError::MaxScopeDepthExceeded { .. }) if !self.strict_scopes => {
                log::warn!("{e}; staying at depth {}", self.scopes.depth());
                Ok(self.scopes.depth())
            },
            result => result,
        }
    }

    /// Closes the innermost scope, removing the bindings it introduced.
    ///
    /// Returns the removed names. Does nothing at global scope.
    pub fn exit_scope(&mut self) -> Vec<String> {
        self.scopes.exit_scope(&mut self.symbols)
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Unary expressions applied to a variable update that variable as a side
    /// effect. If evaluation fails the symbol table is left unchanged.
    ///
    /// # Example
    /// ```
    /// use borg::{ast::{Expr, UnaryOperator}, interpreter::evaluator::core::Context};
    ///
    /// let mut context = Context::new();
    /// context.define_in_scope("X", 5);
    ///
    /// let expr = Expr::Postfix { operand: "X".to_string(),
    ///                            op:      UnaryOperator::Increment, };
    ///
    /// assert_eq!(context.eval(&expr), Ok(5));
    /// assert_eq!(context.lookup("X"), Some(6));
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Operand { token } => self.resolve(token),
            Expr::Prefix { op, operand } => self.eval_prefix(*op, operand),
            Expr::Postfix { operand, op } => self.eval_postfix(*op, operand),
            Expr::Binary { left, op, right } => {
                let left = self.resolve(left)?;
                let right = self.resolve(right)?;
                Self::eval_binary(*op, left, right)
            },
        }
    }
}
