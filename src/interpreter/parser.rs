/// Command recognition.
///
/// Classifies one line's words as a command and validates its shape.
pub mod command;

/// Expression parsing.
///
/// Builds an expression from the words that follow `VAR <name> =`, `PRINT` or
/// `<name> =`.
pub mod expression;

/// Utility functions for the parser.
///
/// Keyword and operator recognition, and variable name validation.
pub mod utils;
