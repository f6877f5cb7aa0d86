//! Error types for parsing and division.

use thiserror::Error;

/// Errors that can occur while constructing or dividing a [`BigInt`].
///
/// [`BigInt`]: crate::BigInt
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BigIntError {
    /// The input contained something other than an optionally signed run
    /// of decimal digits.
    #[error("expected an integer, got '{0}'")]
    InvalidFormat(String),

    /// The divisor of `/`, `%`, or [`BigInt::div_rem`] was zero.
    ///
    /// [`BigInt::div_rem`]: crate::BigInt::div_rem
    #[error("division by zero")]
    DivisionByZero,
}
