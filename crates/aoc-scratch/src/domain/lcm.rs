//! GCD / LCM arithmetic
//!
//! Values are `u128` and every multiplication is checked, so an LCM that does
//! not fit is reported instead of wrapping.

use thiserror::Error;

/// Errors raised while turning a number list into its LCM
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LcmError {
    /// Token is not a non-negative decimal integer that fits in `u128`
    #[error("invalid token '{token}': expected a non-negative integer")]
    InvalidToken { token: String },
    /// Intermediate LCM does not fit in `u128`
    #[error("LCM of {left} and {right} overflows u128")]
    Overflow { left: u128, right: u128 },
}

/// Greatest common divisor (Euclid). `gcd(0, 0)` is 0.
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple of two values
///
/// Any zero operand yields 0.
pub fn lcm(a: u128, b: u128) -> Result<u128, LcmError> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    (a / gcd(a, b))
        .checked_mul(b)
        .ok_or(LcmError::Overflow { left: a, right: b })
}

/// Least common multiple of a list of values
///
/// The LCM of a single value is the value itself. An empty list yields 1,
/// the identity of the operation.
pub fn lcm_of<I>(values: I) -> Result<u128, LcmError>
where
    I: IntoIterator<Item = u128>,
{
    values.into_iter().try_fold(1, lcm)
}

/// Parse whitespace-separated tokens as non-negative integers
///
/// Only ASCII digits are accepted, so signs and embedded separators are
/// rejected rather than silently reinterpreted.
pub fn parse_tokens(text: &str) -> Result<Vec<u128>, LcmError> {
    text.split_whitespace()
        .map(|token| {
            let invalid = || LcmError::InvalidToken {
                token: token.to_string(),
            };
            if !token.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            token.parse::<u128>().map_err(|_| invalid())
        })
        .collect()
}

/// LCM of every whitespace-separated integer in `text`
///
/// All tokens are validated before any arithmetic happens.
pub fn lcm_of_text(text: &str) -> Result<u128, LcmError> {
    lcm_of(parse_tokens(text)?)
}
