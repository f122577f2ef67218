#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The first word of the line is not a keyword and does not start an
    /// assignment.
    UnknownCommand {
        /// The offending first word.
        word: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A literal, keyword or operator was used where a variable name is
    /// required.
    InvalidName {
        /// The rejected name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The line ended before a required token.
    MissingToken {
        /// A description of what was expected.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnknownCommand { word, line } => {
                write!(f, "Error on line {line}: Unknown command '{word}'.")
            },

            Self::InvalidName { name, line } => write!(f,
                                                       "Error on line {line}: '{name}' cannot be used as a variable name."),

            Self::MissingToken { expected, line } => {
                write!(f, "Error on line {line}: Expected {expected}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
