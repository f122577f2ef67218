use crate::{
    ast::{BinaryOperator, UnaryOperator},
    util::num::is_integer_shaped,
};

/// Words with a fixed meaning at the start of a line.
pub const KEYWORDS: [&str; 6] = ["COM", "START", "FINISH", "VAR", "PRINT", "EXIT"];

/// Returns `true` if `word` is a BORG keyword. Keywords are case-sensitive.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns `true` if `word` is one of `+ - * / % ^`.
#[must_use]
pub fn is_binary_operator(word: &str) -> bool {
    word.parse::<BinaryOperator>().is_ok()
}

/// Returns `true` if `word` is `++` or `--`.
#[must_use]
pub fn is_unary_operator(word: &str) -> bool {
    word.parse::<UnaryOperator>().is_ok()
}

/// Checks whether a word may name a variable.
///
/// Any word is a valid name unless it is shaped like an integer (in range or
/// not), a keyword, an operator or `=`.
///
/// ## Example
/// ```
/// use borg::interpreter::parser::utils::is_valid_name;
///
/// assert!(is_valid_name("BORAMIR"));
/// assert!(is_valid_name("x1"));
/// assert!(!is_valid_name("42"));
/// assert!(!is_valid_name("99999999999999999999"));
/// assert!(!is_valid_name("VAR"));
/// assert!(!is_valid_name("++"));
/// assert!(!is_valid_name("="));
/// ```
#[must_use]
pub fn is_valid_name(word: &str) -> bool {
    !is_integer_shaped(word)
    && !is_keyword(word)
    && !is_binary_operator(word)
    && !is_unary_operator(word)
    && word != "="
}
