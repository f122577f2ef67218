//! # borg
//!
//! borg is an interpreter for BORG, a small line-oriented scripting language
//! written in Rust. A BORG program defines integer variables, evaluates
//! expressions of at most one operator, opens and closes nested scopes and
//! prints results.
//!
//! ```text
//! VAR BORAMIR = 25
//! START
//!     VAR GANDALF = BORAMIR * 2
//!     PRINT GANDALF
//! FINISH
//! PRINT GANDALF
//! ```
//!
//! prints `GANDALF IS 50` followed by `GANDALF IS UNDEFINED`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, BufRead, Write};

use crate::{
    ast::Command,
    config::Config,
    error::CommandError,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::command::parse_command},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Command` and `Expr` enums and the operator types
/// that represent a parsed BORG line. Commands are built by the parser and
/// executed by the evaluator.
///
/// # Responsibilities
/// - Defines one command variant per kind of BORG line.
/// - Defines the supported expression forms and operators.
/// - Writes expressions back in source form for result lines.
pub mod ast;
/// Interpreter settings.
///
/// Bucket count of the symbol table, scope nesting limit and how that limit
/// is enforced.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// executing a command. None of them stop the interpreter; each is reported
/// as a diagnostic line.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator, command
///   boundary).
/// - Attaches line numbers to parse errors for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of command execution.
///
/// This module ties together lexing, parsing, the symbol table, scopes and
/// evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, symbol table
///   and scope stack.
/// - Provides entry points for parsing and executing single commands.
pub mod interpreter;
/// General utilities for integer handling.
///
/// This module provides literal recognition and checked integer conversion
/// used by the parser and the evaluator.
pub mod util;

/// What happened when a line was fed to the [`Interpreter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line produced a result, e.g. `BORAMIR IS 25`.
    Output(String),
    /// The line failed; the message describes why.
    Diagnostic(String),
    /// The line ran and printed nothing.
    Silent,
    /// The program has ended with `EXIT`.
    Exit,
}

impl Outcome {
    /// Returns the printed line, if the outcome has one.
    #[must_use]
    pub fn line(&self) -> Option<&str> {
        match self {
            Self::Output(line) | Self::Diagnostic(line) => Some(line),
            Self::Silent | Self::Exit => None,
        }
    }
}

/// Runs a BORG program one line at a time.
///
/// The interpreter owns the evaluation [`Context`] and counts lines for error
/// messages. Once a line reading `EXIT` has been fed, every further line is
/// ignored and reports [`Outcome::Exit`].
///
/// # Example
/// ```
/// use borg::{Interpreter, Outcome, config::Config};
///
/// let mut interpreter = Interpreter::new(&Config::default());
///
/// assert_eq!(interpreter.feed_line("VAR LEGOLAS = 101"), Outcome::Silent);
/// assert_eq!(interpreter.feed_line("PRINT LEGOLAS"), Outcome::Output("LEGOLAS IS 101".into()));
/// assert_eq!(interpreter.feed_line("EXIT"), Outcome::Exit);
/// assert_eq!(interpreter.feed_line("PRINT LEGOLAS"), Outcome::Exit);
/// ```
#[derive(Debug, Clone)]
pub struct Interpreter {
    context:  Context,
    line:     usize,
    finished: bool,
}

impl Interpreter {
    /// Creates an interpreter with an empty global scope.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { context:  Context::with_config(config),
               line:     0,
               finished: false, }
    }

    /// Returns the evaluation context.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Returns `true` once `EXIT` has been executed.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Tokenizes, parses and executes one source line.
    ///
    /// Errors are never propagated: a failing line yields
    /// [`Outcome::Diagnostic`] and the interpreter is ready for the next one.
    pub fn feed_line(&mut self, source: &str) -> Outcome {
        if self.finished {
            return Outcome::Exit;
        }
        self.line += 1;

        let command = match self.parse_line(source) {
            Ok(command) => command,
            Err(e) => return Outcome::Diagnostic(e.to_string()),
        };
        log::trace!("line {}: {command:?}", self.line);

        if let Command::Exit { .. } = command {
            self.finished = true;
            return Outcome::Exit;
        }

        match self.context.execute(&command) {
            Ok(Some(output)) => Outcome::Output(output),
            Ok(None) => Outcome::Silent,
            Err(e) => {
                log::debug!("line {} failed: {e:?}",
                            command.line_number().unwrap_or(self.line));
                Outcome::Diagnostic(e.to_string())
            },
        }
    }

    /// Executes lines from `reader` as they arrive, writing every printed
    /// line to `out`, until `EXIT` or end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a bad byte
    /// only affects the line it is on. Lines may end in `\n` or `\r\n`.
    ///
    /// # Errors
    /// Returns the underlying I/O error if reading from `reader` or writing
    /// to `out` fails.
    ///
    /// # Example
    /// ```
    /// use borg::{Interpreter, config::Config};
    ///
    /// let mut interpreter = Interpreter::new(&Config::default());
    /// let mut out = Vec::new();
    ///
    /// interpreter.run_reader(&b"VAR X = 2\r\nPRINT X ^ 3\nEXIT\nPRINT X\n"[..], &mut out)
    ///            .unwrap();
    /// assert_eq!(out, b"X ^ 3 IS 8\n");
    /// ```
    pub fn run_reader<R: BufRead, W: Write>(&mut self, mut reader: R, mut out: W) -> io::Result<()> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }

            let raw = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
            let line = String::from_utf8_lossy(raw);

            match self.feed_line(&line) {
                Outcome::Exit => return Ok(()),
                outcome => {
                    if let Some(text) = outcome.line() {
                        writeln!(out, "{text}")?;
                        out.flush()?;
                    }
                },
            }
        }
    }

    fn parse_line(&self, source: &str) -> Result<Command, CommandError> {
        let words = tokenize(source, self.line)?;
        parse_command(&words, self.line)
    }
}

/// Runs a whole program and returns every line it prints.
///
/// Results and diagnostics are returned in order. Execution stops at the
/// first `EXIT`; lines after it are not run.
///
/// # Example
/// ```
/// use borg::{config::Config, get_result};
///
/// let source = "VAR BORAMIR = 25\nPRINT BORAMIR * 2\nPRINT GANDALF\nEXIT\nPRINT BORAMIR";
/// let output = get_result(source, &Config::default());
///
/// assert_eq!(output, ["BORAMIR * 2 IS 50", "GANDALF IS UNDEFINED"]);
/// ```
#[must_use]
pub fn get_result(source: &str, config: &Config) -> Vec<String> {
    let mut interpreter = Interpreter::new(config);
    let mut output = Vec::new();

    for line in source.lines() {
        let outcome = interpreter.feed_line(line);
        if outcome == Outcome::Exit {
            break;
        }
        if let Some(text) = outcome.line() {
            output.push(text.to_string());
        }
    }

    output
}
