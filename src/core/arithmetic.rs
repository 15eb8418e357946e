//! Integer addition and operand parsing

use crate::error::{CalcError, Result};

/// Add two integers.
///
/// Overflow wraps around using two's-complement arithmetic in every build
/// profile, so `add(i64::MAX, 1) == i64::MIN`.
#[must_use]
pub const fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Parse a user-supplied operand as a decimal integer.
///
/// Accepts an optional `+` or `-` sign followed by digits. Surrounding
/// whitespace is not trimmed.
pub fn parse_operand(input: &str) -> Result<i64> {
    input
        .parse::<i64>()
        .map_err(|source| CalcError::invalid_operand(input, source))
}
