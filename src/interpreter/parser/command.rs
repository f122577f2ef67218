use crate::{
    ast::{Command, UnaryOperator},
    error::{CommandError, ParseError, RuntimeError},
    interpreter::parser::{expression::parse_expression, utils::is_valid_name},
};

/// Result type used by command parsing.
pub type ParseResult<T> = Result<T, CommandError>;

/// Parses the words of one source line into a [`Command`].
///
/// Lines are recognized by their first word:
///
/// ```text
///     COM <anything>
///     START
///     FINISH
///     VAR <name> = <expression>
///     PRINT <expression>
///     EXIT
///     <name> = <expression>
///     <name> ++ | <name> --
/// ```
///
/// An empty word list is a [`Command::Blank`].
///
/// # Parameters
/// - `words`: The line's tokens, in order.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// - `ParseError::UnknownCommand` if the first word is not a keyword and the
///   line is not an assignment.
/// - `ParseError::UnexpectedToken` for trailing words after `START`, `FINISH`
///   or `EXIT`.
/// - `ParseError::InvalidName` / `ParseError::MissingToken` for a bad or
///   missing variable name.
/// - `CommandError::Define` / `CommandError::Redefine` when the expression of
///   a definition or assignment is malformed.
/// - `CommandError::Runtime` when the expression of a `PRINT` is malformed.
///
/// # Example
/// ```
/// use borg::{ast::Command, interpreter::parser::command::parse_command};
///
/// let words = ["START"].map(String::from);
/// assert_eq!(parse_command(&words, 4).unwrap(), Command::Start { line: 4 });
///
/// let words = ["FROB", "X"].map(String::from);
/// assert!(parse_command(&words, 5).is_err());
/// ```
pub fn parse_command(words: &[String], line: usize) -> ParseResult<Command> {
    let Some((first, rest)) = words.split_first() else {
        return Ok(Command::Blank);
    };

    match first.as_str() {
        "COM" => Ok(Command::Comment { line }),
        "START" => expect_end(rest, line).map(|()| Command::Start { line }),
        "FINISH" => expect_end(rest, line).map(|()| Command::Finish { line }),
        "EXIT" => expect_end(rest, line).map(|()| Command::Exit { line }),
        "VAR" => parse_var(rest, line),
        "PRINT" => Ok(Command::Print { expr: parse_expression(rest)?,
                                       line }),
        _ => parse_assignment(first, rest, line),
    }
}

fn expect_end(rest: &[String], line: usize) -> ParseResult<()> {
    match rest.first() {
        Some(token) => Err(ParseError::UnexpectedToken { token: token.clone(),
                                                         line }.into()),
        None => Ok(()),
    }
}

/// Parses `<name> = <expression>` after the `VAR` keyword.
fn parse_var(rest: &[String], line: usize) -> ParseResult<Command> {
    let Some((name, rest)) = rest.split_first() else {
        return Err(ParseError::MissingToken { expected: "a variable name after VAR",
                                              line }.into());
    };
    check_name(name, line)?;

    let expr = match rest.split_first() {
        Some((equals, words)) if equals == "=" => parse_expression(words),
        Some((other, _)) => Err(RuntimeError::invalid(format!("expected '=' after {name}, found '{other}'"))),
        None => Err(RuntimeError::invalid(format!("expected '=' after {name}"))),
    }.map_err(|source| CommandError::Define { name: name.clone(),
                                              source })?;

    Ok(Command::Var { name: name.clone(),
                      expr,
                      line })
}

/// Parses a line that does not start with a keyword.
fn parse_assignment(first: &str, rest: &[String], line: usize) -> ParseResult<Command> {
    if let [op] = rest
       && let Ok(op) = op.parse::<UnaryOperator>()
    {
        check_name(first, line)?;
        return Ok(Command::Step { name: first.to_string(),
                                  op,
                                  line });
    }

    if let Some((equals, words)) = rest.split_first()
       && equals == "="
    {
        check_name(first, line)?;
        let expr = parse_expression(words).map_err(|source| CommandError::Redefine { name: first.to_string(),
                                                                                     source })?;
        return Ok(Command::Assignment { name: first.to_string(),
                                        expr,
                                        line });
    }

    Err(ParseError::UnknownCommand { word: first.to_string(),
                                     line }.into())
}

fn check_name(name: &str, line: usize) -> ParseResult<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ParseError::InvalidName { name: name.to_string(),
                                      line }.into())
    }
}
