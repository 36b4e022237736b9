//! Errors raised when reading a [`Money`](super::Money) from text.

use std::num::ParseFloatError;

use thiserror::Error;

/// Errors that can occur when parsing a [`Money`](super::Money) from a string.
///
/// Construction from a number never fails; only text conversion does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// The input was empty or contained only whitespace.
    #[error("Empty amount")]
    Empty,

    /// The input was not a floating-point number.
    #[error("Invalid amount: '{input}'")]
    InvalidAmount {
        /// The rejected input, as given.
        input: String,
        /// The underlying float parse failure.
        #[source]
        source: ParseFloatError,
    },
}
