use crate::{
    ast::Command,
    error::{CommandError, RuntimeError},
    interpreter::evaluator::core::Context,
};

impl Context {
    /// Executes a single command.
    ///
    /// Returns the line the command prints, if it prints one. Only `PRINT`
    /// produces output on success.
    ///
    /// `EXIT` has no effect here; stopping the program is up to the caller.
    ///
    /// # Errors
    /// - `CommandError::Define` if the expression of a `VAR` fails; nothing is
    ///   bound.
    /// - `CommandError::Redefine` if an assignment targets an unbound name or
    ///   its expression fails; the target keeps its value.
    /// - `CommandError::Runtime` if a `PRINT` expression, an in-place
    ///   increment or (in strict mode) a `START` fails.
    ///
    /// # Example
    /// ```
    /// use borg::{
    ///     ast::{Command, Expr},
    ///     interpreter::evaluator::core::Context,
    /// };
    ///
    /// let mut context = Context::new();
    /// let var = Command::Var { name: "BORAMIR".to_string(),
    ///                          expr: Expr::Operand { token: "25".to_string() },
    ///                          line: 1, };
    /// let print = Command::Print { expr: Expr::Operand { token: "BORAMIR".to_string() },
    ///                              line: 2, };
    ///
    /// assert_eq!(context.execute(&var), Ok(None));
    /// assert_eq!(context.execute(&print), Ok(Some("BORAMIR IS 25".to_string())));
    /// ```
    pub fn execute(&mut self, command: &Command) -> Result<Option<String>, CommandError> {
        match command {
            Command::Blank | Command::Comment { .. } | Command::Exit { .. } => Ok(None),
            Command::Start { .. } => {
                self.enter_scope()?;
                Ok(None)
            },
            Command::Finish { .. } => {
                self.exit_scope();
                Ok(None)
            },
            Command::Var { name, expr, .. } => {
                let value = self.eval(expr)
                                .map_err(|source| CommandError::Define { name: name.clone(),
                                                                         source })?;
                self.define_in_scope(name, value);
                Ok(None)
            },
            Command::Print { expr, .. } => {
                let value = self.eval(expr)?;
                Ok(Some(format!("{expr} IS {value}")))
            },
            Command::Assignment { name, expr, .. } => {
                if !self.symbols.contains(name) {
                    let source = RuntimeError::UndefinedVariable { name: name.clone(), };
                    return Err(CommandError::Redefine { name: name.clone(),
                                                        source });
                }
                let value = self.eval(expr)
                                .map_err(|source| CommandError::Redefine { name: name.clone(),
                                                                           source })?;
                self.symbols.assign(name, value);
                Ok(None)
            },
            Command::Step { name, op, .. } => {
                self.eval_prefix(*op, name)?;
                Ok(None)
            },
        }
    }
}
