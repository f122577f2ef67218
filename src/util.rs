/// Integer helpers.
///
/// This module provides the literal recognizer used for operand resolution and
/// a checked conversion for exponents. All fallible helpers return a `Result`
/// carrying the [`RuntimeError`](crate::error::RuntimeError) that should be
/// reported, never a sentinel value.
pub mod num;
