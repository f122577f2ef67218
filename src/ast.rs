use std::{fmt, str::FromStr};

/// Represents a binary operator.
///
/// BORG expressions carry at most one binary operator, so there is no
/// precedence table: the operator simply combines the two operands on either
/// side of it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating integer division (`/`)
    Div,
    /// Integer remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
///
/// Both operators may be written before (`++ X`) or after (`X ++`) their
/// operand. See [`Expr::Prefix`] and [`Expr::Postfix`] for the difference.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Increment (`++`)
    Increment,
    /// Decrement (`--`)
    Decrement,
}

/// An expression as it appears on the right hand side of `VAR`, `PRINT` or an
/// assignment.
///
/// Operands are kept as their source tokens. Whether a token is a literal or a
/// variable reference is decided when the expression is evaluated, since the
/// answer for names depends on the symbol table at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A single literal or variable reference (e.g. `BORAMIR`, `25`).
    Operand {
        /// The operand token.
        token: String,
    },
    /// A unary operator written before its operand (e.g. `++ X`).
    ///
    /// Evaluates to the updated value.
    Prefix {
        /// The operator.
        op:      UnaryOperator,
        /// The operand token.
        operand: String,
    },
    /// A unary operator written after its operand (e.g. `X --`).
    ///
    /// Evaluates to the value held before the update.
    Postfix {
        /// The operand token.
        operand: String,
        /// The operator.
        op:      UnaryOperator,
    },
    /// A binary operation (e.g. `BORAMIR * 2`).
    Binary {
        /// Left operand token.
        left:  String,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand token.
        right: String,
    },
}

/// Represents one parsed line of a BORG program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A line containing nothing but whitespace.
    Blank,
    /// `COM ...`; the rest of the line is ignored.
    Comment {
        /// Line number in the source code.
        line: usize,
    },
    /// `START`; opens a nested scope.
    Start {
        /// Line number in the source code.
        line: usize,
    },
    /// `FINISH`; closes the innermost scope.
    Finish {
        /// Line number in the source code.
        line: usize,
    },
    /// `VAR <name> = <expr>`; defines a variable in the current scope.
    Var {
        /// The name of the variable.
        name: String,
        /// The initial value of the variable.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `PRINT <expr>`; evaluates and reports an expression.
    Print {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `<name> = <expr>`; reassigns an existing variable.
    Assignment {
        /// The name of the variable.
        name: String,
        /// The value which is being assigned.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// `<name> ++` or `<name> --`; updates an existing variable in place.
    Step {
        /// The name of the variable.
        name: String,
        /// The operator to apply.
        op:   UnaryOperator,
        /// Line number in the source code.
        line: usize,
    },
    /// `EXIT`; stops the program.
    Exit {
        /// Line number in the source code.
        line: usize,
    },
}

impl Command {
    /// Gets the line number from `self`, or `None` for blank lines.
    /// ## Example
    /// ```
    /// use borg::ast::Command;
    ///
    /// assert_eq!(Command::Start { line: 3 }.line_number(), Some(3));
    /// assert_eq!(Command::Blank.line_number(), None);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::Blank => None,
            Self::Comment { line }
            | Self::Start { line }
            | Self::Finish { line }
            | Self::Var { line, .. }
            | Self::Print { line, .. }
            | Self::Assignment { line, .. }
            | Self::Step { line, .. }
            | Self::Exit { line } => Some(*line),
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "%" => Ok(Self::Mod),
            "^" => Ok(Self::Pow),
            _ => Err(()),
        }
    }
}

impl FromStr for UnaryOperator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "++" => Ok(Self::Increment),
            "--" => Ok(Self::Decrement),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "++"),
            Self::Decrement => write!(f, "--"),
        }
    }
}

/// Writes the expression back in source form, tokens separated by single
/// spaces. This is the left hand side of every `... IS <value>` line.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand { token } => write!(f, "{token}"),
            Self::Prefix { op, operand } => write!(f, "{op} {operand}"),
            Self::Postfix { operand, op } => write!(f, "{operand} {op}"),
            Self::Binary { left, op, right } => write!(f, "{left} {op} {right}"),
        }
    }
}
