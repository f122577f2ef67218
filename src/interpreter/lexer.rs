use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in a BORG source line.
///
/// BORG has no punctuation-sensitive syntax: keywords, operators, names and
/// literals are all just words separated by whitespace. The parser gives each
/// word its meaning.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// Any maximal run of non-whitespace characters, such as `VAR`, `++` or
    /// `BORAMIR`.
    #[regex(r"[^\s]+", |lex| lex.slice().to_string())]
    Word(String),
    /// Any Unicode whitespace, including vertical tabs and no-break spaces.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Splits one source line into its words.
///
/// Empty tokens never appear in the result; a blank line yields an empty
/// vector.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` if the lexer encounters input it
/// cannot classify.
///
/// # Example
/// ```
/// use borg::interpreter::lexer::tokenize;
///
/// let words = tokenize("  VAR   BORAMIR =\t25 ", 1).unwrap();
/// assert_eq!(words, ["VAR", "BORAMIR", "=", "25"]);
///
/// assert!(tokenize("   ", 2).unwrap().is_empty());
/// ```
pub fn tokenize(source: &str, line: usize) -> Result<Vec<String>, ParseError> {
    let mut words = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        match token {
            Ok(Token::Word(word)) => words.push(word),
            Ok(Token::Ignored) => {},
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line });
            },
        }
    }

    Ok(words)
}
