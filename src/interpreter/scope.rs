use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, symbol_table::SymbolTable},
};

/// The names introduced while one scope was the innermost active scope, in
/// introduction order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    names: Vec<String>,
}

impl Scope {
    /// Returns the recorded names, oldest first.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn record(&mut self, name: &str) {
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
    }
}

/// Tracks the active scopes of a program.
///
/// The bottom entry is the global scope. It is always present and is never
/// popped. Every other entry was pushed by `START` and is popped by `FINISH`,
/// which removes the scope's recorded names from the symbol table.
///
/// The stack owns names only; values live in the [`SymbolTable`].
///
/// ## Example
/// ```
/// use borg::interpreter::{scope::ScopeStack, symbol_table::SymbolTable};
///
/// let mut table = SymbolTable::new();
/// let mut scopes = ScopeStack::new(None);
///
/// scopes.enter_scope().unwrap();
/// table.define("GANDALF", 49);
/// scopes.record("GANDALF");
///
/// assert_eq!(scopes.exit_scope(&mut table), ["GANDALF"]);
/// assert_eq!(table.lookup("GANDALF"), None);
/// assert_eq!(scopes.depth(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ScopeStack {
    scopes:    Vec<Scope>,
    max_depth: Option<usize>,
}

impl ScopeStack {
    /// Creates a stack holding only the global scope.
    ///
    /// `max_depth` bounds the number of scopes nested inside the global one;
    /// `None` leaves nesting unbounded.
    #[must_use]
    pub fn new(max_depth: Option<usize>) -> Self {
        Self { scopes: vec![Scope::default()],
               max_depth }
    }

    /// Returns the nesting depth. The global scope alone is depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    /// Returns the names recorded in the innermost scope, oldest first.
    #[must_use]
    pub fn current_names(&self) -> &[String] {
        self.scopes.last().map_or(&[], Scope::names)
    }

    /// Pushes a new empty scope and returns the new depth.
    ///
    /// # Errors
    /// Returns `RuntimeError::MaxScopeDepthExceeded` if the stack is already
    /// at its nesting limit. The stack is left unchanged in that case.
    ///
    /// # Example
    /// ```
    /// use borg::{error::RuntimeError, interpreter::scope::ScopeStack};
    ///
    /// let mut scopes = ScopeStack::new(Some(1));
    /// assert_eq!(scopes.enter_scope(), Ok(1));
    /// assert_eq!(scopes.enter_scope(), Err(RuntimeError::MaxScopeDepthExceeded { max: 1 }));
    /// assert_eq!(scopes.depth(), 1);
    /// ```
    pub fn enter_scope(&mut self) -> EvalResult<usize> {
        if let Some(max) = self.max_depth
           && self.depth() >= max
        {
            return Err(RuntimeError::MaxScopeDepthExceeded { max });
        }

        self.scopes.push(Scope::default());
        log::debug!("entered scope at depth {}", self.depth());
        Ok(self.depth())
    }

    /// Pops the innermost scope and removes every name it recorded from
    /// `symbols`, newest first.
    ///
    /// Returns the names that were actually removed, in removal order. A
    /// recorded name already torn down by an inner scope is skipped. At depth 0
    /// this is a no-op that returns an empty vector: the global scope and its
    /// bindings are never torn down.
    pub fn exit_scope(&mut self, symbols: &mut SymbolTable) -> Vec<String> {
        if self.depth() == 0 {
            log::debug!("FINISH at global scope ignored");
            return Vec::new();
        }

        let Some(scope) = self.scopes.pop() else {
            return Vec::new();
        };

        let removed: Vec<String> = scope.names
                                        .into_iter()
                                        .rev()
                                        .filter(|name| symbols.remove(name).is_some())
                                        .collect();
        log::debug!("left scope at depth {}, removed {removed:?}", self.depth() + 1);
        removed
    }

    /// Records `name` as introduced by the innermost scope.
    ///
    /// A name already recorded in the innermost scope is not recorded again.
    pub fn record(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.record(name);
        }
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new(None)
    }
}
