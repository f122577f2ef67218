use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Parses the words of an expression.
///
/// The supported forms are:
///
/// ```text
///     x              operand
///     ++ x   -- x    prefix unary
///     x ++   x --    postfix unary
///     a op b         binary, op one of + - * / % ^
/// ```
///
/// Operands are not resolved here; `x`, `a` and `b` may be any word.
///
/// # Errors
/// Returns `RuntimeError::InvalidExpression` if the words match none of the
/// forms, for example when the middle word of a three word expression is not
/// an operator.
///
/// # Example
/// ```
/// use borg::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::expression::parse_expression,
/// };
///
/// let words = ["BORAMIR", "*", "2"].map(String::from);
/// let expr = parse_expression(&words).unwrap();
///
/// assert_eq!(expr,
///            Expr::Binary { left:  "BORAMIR".to_string(),
///                           op:    BinaryOperator::Mul,
///                           right: "2".to_string(), });
/// assert!(parse_expression(&["A", "B", "C"].map(String::from)).is_err());
/// ```
pub fn parse_expression(words: &[String]) -> EvalResult<Expr> {
    match words {
        [] => Err(RuntimeError::invalid("missing expression")),
        [token] => Ok(Expr::Operand { token: token.clone(), }),
        [first, second] => {
            if let Ok(op) = first.parse::<UnaryOperator>() {
                Ok(Expr::Prefix { op,
                                  operand: second.clone() })
            } else if let Ok(op) = second.parse::<UnaryOperator>() {
                Ok(Expr::Postfix { operand: first.clone(),
                                   op })
            } else {
                Err(RuntimeError::invalid(format!("'{first} {second}' has no unary operator")))
            }
        },
        [left, op, right] => {
            let op = op.parse::<BinaryOperator>()
                       .map_err(|()| RuntimeError::invalid(format!("'{op}' is not an operator")))?;
            Ok(Expr::Binary { left: left.clone(),
                              op,
                              right: right.clone() })
        },
        _ => Err(RuntimeError::invalid(format!("too many tokens in '{}'", words.join(" ")))),
    }
}
