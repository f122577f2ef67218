use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Parses a token as a signed 64-bit integer literal.
///
/// Returns `None` for anything that is not a complete integer, including
/// integer-shaped tokens outside the `i64` range. Use [`is_integer_shaped`]
/// to tell those apart from names.
///
/// ## Example
/// ```
/// use borg::util::num::parse_literal;
///
/// assert_eq!(parse_literal("25"), Some(25));
/// assert_eq!(parse_literal("-7"), Some(-7));
/// assert_eq!(parse_literal("BORAMIR"), None);
/// assert_eq!(parse_literal("-"), None);
/// ```
#[must_use]
pub fn parse_literal(token: &str) -> Option<i64> {
    token.parse().ok()
}

/// Returns `true` if `token` is an optional sign followed by one or more
/// ASCII digits, whatever its magnitude.
///
/// ## Example
/// ```
/// use borg::util::num::is_integer_shaped;
///
/// assert!(is_integer_shaped("-42"));
/// assert!(is_integer_shaped("99999999999999999999"));
/// assert!(!is_integer_shaped("+"));
/// assert!(!is_integer_shaped("4X"));
/// ```
#[must_use]
pub fn is_integer_shaped(token: &str) -> bool {
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Safely converts an `i64` exponent to `u32`.
///
/// ## Errors
/// - `RuntimeError::NegativeExponent` if the value is negative.
/// - `RuntimeError::Overflow` if the value exceeds `u32::MAX`.
///
/// # Example
/// ```
/// use borg::{error::RuntimeError, util::num::exponent_to_u32_checked};
///
/// assert_eq!(exponent_to_u32_checked(5).unwrap(), 5);
///
/// let err = exponent_to_u32_checked(-1).unwrap_err();
/// assert_eq!(err, RuntimeError::NegativeExponent { exponent: -1 });
///
/// let err = exponent_to_u32_checked(i64::MAX).unwrap_err();
/// assert_eq!(err, RuntimeError::Overflow);
/// ```
pub fn exponent_to_u32_checked(value: i64) -> EvalResult<u32> {
    if value < 0 {
        return Err(RuntimeError::NegativeExponent { exponent: value });
    }
    u32::try_from(value).map_err(|_| RuntimeError::Overflow)
}
