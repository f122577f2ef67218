/// Core evaluation logic and context management.
///
/// Contains the runtime context that owns the symbol table and scope stack,
/// and the entry point for evaluating whole expressions.
pub mod core;

/// Operand resolution.
///
/// Turns a token into an integer, either by reading it as a literal or by
/// looking it up as a variable.
pub mod operand;

/// Unary operator evaluation logic.
///
/// Implements `++` and `--` in prefix and postfix position, including the
/// update of the variable they are applied to.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Implements `+ - * / % ^` over two resolved operands with checked integer
/// arithmetic.
pub mod binary;

/// Command execution.
///
/// Carries out the effect of each parsed command on the context and formats
/// the line it prints, if any.
pub mod command;
