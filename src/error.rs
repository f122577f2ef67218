/// Parsing errors.
///
/// Defines the errors that can occur while splitting a source line into words
/// and recognizing the command it spells. Parse errors carry the source line
/// they were found on.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while resolving operands, evaluating
/// expressions and managing scopes: undefined variables, division by zero,
/// malformed expressions and arithmetic overflow.
pub mod runtime_error;
/// Command errors.
///
/// The error type seen at the command boundary. It wraps parse and runtime
/// errors and adds the context of the definition or assignment that failed.
pub mod command_error;

pub use command_error::CommandError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
