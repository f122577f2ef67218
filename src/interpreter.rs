/// The evaluator module executes commands and computes results.
///
/// The evaluator resolves operands against the symbol table, applies unary and
/// binary operators, and carries out each command's effect on variables and
/// scopes. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Resolves tokens to literal values or bound variables.
/// - Evaluates unary and binary expressions, including increment side effects.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module splits source lines into words.
///
/// BORG is whitespace-delimited: every maximal run of non-whitespace
/// characters is one token, and token order is preserved.
pub mod lexer;
/// The parser module recognizes commands and expressions.
///
/// The parser takes the words of one line and classifies them as a
/// [`Command`](crate::ast::Command), validating the shape of the command and
/// of its expression.
///
/// # Responsibilities
/// - Maps keywords to commands and detects assignment lines.
/// - Validates variable names.
/// - Builds [`Expr`](crate::ast::Expr) values for the supported expression
///   forms.
pub mod parser;
/// Scope tracking.
///
/// Keeps the stack of active scopes and the names each one introduced, so that
/// closing a scope can remove exactly those bindings.
pub mod scope;
/// Variable storage.
///
/// A hash table with chaining that maps variable names to their integer
/// values.
pub mod symbol_table;
