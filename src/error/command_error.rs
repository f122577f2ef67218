use crate::error::{ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// An error reported for a single command.
///
/// The `Display` output is the diagnostic line the interpreter prints.
pub enum CommandError {
    /// The line could not be parsed into a command.
    Parse(ParseError),
    /// Evaluation failed outside of a definition or assignment.
    Runtime(RuntimeError),
    /// `VAR <name> = ...` failed; no binding was created.
    Define {
        /// The variable being defined.
        name:   String,
        /// Why the definition failed.
        source: RuntimeError,
    },
    /// `<name> = ...` failed; the binding keeps its previous value.
    Redefine {
        /// The variable being reassigned.
        name:   String,
        /// Why the assignment failed.
        source: RuntimeError,
    },
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Define { name, source } => write!(f, "Error defining variable {name}: {source}"),
            Self::Redefine { name, source } => {
                write!(f, "Error redefining variable {name}: {source}")
            },
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) | Self::Define { source: e, .. } | Self::Redefine { source: e, .. } => {
                Some(e)
            },
        }
    }
}

impl From<ParseError> for CommandError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for CommandError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
