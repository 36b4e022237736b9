//! Money value object.
//!
//! [`Money`] wraps a single `f64` amount and describes itself through the
//! canonical float rendering, so `Money::new(3.5)` prints as `3.5` and
//! `Money::new(0.0)` prints as `0.0`.
//!
//! The amount is unconstrained: zero, negative, infinite and
//! NaN amounts are all representable.
//!
//! # Literal Conversions
//!
//! `Money` converts from float and integer literals and parses from text:
//!
//! ```rust
//! use tally::money::Money;
//!
//! let from_float: Money = 3.5_f64.into();
//! let from_integer = Money::from(12_i32);
//! let from_text: Money = " -1.25 ".parse().unwrap();
//!
//! assert_eq!(from_float.to_string(), "3.5");
//! assert_eq!(from_integer.to_string(), "12.0");
//! assert_eq!(from_text.to_string(), "-1.25");
//! ```

mod error;

use std::fmt;
use std::str::FromStr;

use crate::describe::{Describable, describe_float};
use crate::typeclass::{AdditiveIdentity, Monoid, Semigroup};

pub use error::ParseMoneyError;

/// A monetary amount.
///
/// `Money` is a `Copy` value type: every binding owns an independent amount,
/// and changing `value` through one binding never affects another.
///
/// # Semigroup and Monoid
///
/// `combine` adds amounts, so a ledger can be totalled with
/// [`Monoid::combine_all`]. `empty` is `-0.0` rather than [`Money::ZERO`]:
/// adding `-0.0` returns every amount bit-for-bit, so a ledger holding only
/// `-0.0` still totals to `-0.0`. An empty ledger totals to `-0.0` as well.
///
/// # Examples
///
/// ```rust
/// use tally::describe::Describable;
/// use tally::money::Money;
/// use tally::typeclass::Monoid;
///
/// let mut price = Money::new(3.5);
/// let quoted = price;
/// price.value = 4.0;
///
/// assert_eq!(quoted.describe(), "3.5");
/// assert_eq!(price.describe(), "4.0");
///
/// let total = Money::combine_all([quoted, price, Money::new(-1.25)]);
/// assert_eq!(total.describe(), "6.25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Money {
    /// The amount. Any `f64` is accepted.
    pub value: f64,
}

impl Money {
    /// The zero amount.
    pub const ZERO: Self = Self::new(0.0);

    /// Creates a new `Money` holding `value`.
    ///
    /// Construction never fails and performs no validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally::money::Money;
    ///
    /// assert_eq!(Money::new(-1.25).value, -1.25);
    /// assert!(Money::new(f64::NAN).value.is_nan());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value }
    }

    /// Returns the amount.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Replaces the amount.
    #[inline]
    pub const fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Consumes the `Money` and returns the amount.
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> f64 {
        self.value
    }

    /// Returns `true` if the amount is zero (either sign).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Returns `true` if the amount is below zero.
    ///
    /// `-0.0` and NaN are not negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }

    /// Returns `true` if the amount is neither infinite nor NaN.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

impl Describable for Money {
    fn describe(&self) -> String {
        describe_float(self.value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.describe())
    }
}

// =============================================================================
// Literal Conversions
// =============================================================================

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<f32> for Money {
    fn from(value: f32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<i32> for Money {
    fn from(value: i32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<u32> for Money {
    fn from(value: u32) -> Self {
        Self::new(f64::from(value))
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.value
    }
}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parses an amount, ignoring surrounding whitespace.
    ///
    /// Every finite canonical rendering reads back to the same amount.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            tracing::debug!(input, "rejected empty money amount");
            return Err(ParseMoneyError::Empty);
        }

        let value = trimmed.parse::<f64>().map_err(|source| {
            tracing::debug!(input, error = %source, "rejected money amount");
            ParseMoneyError::InvalidAmount {
                input: input.to_string(),
                source,
            }
        })?;

        tracing::trace!(input, value, "parsed money amount");
        Ok(Self::new(value))
    }
}

// =============================================================================
// Semigroup and Monoid
// =============================================================================

/// Combines two amounts by adding them.
impl Semigroup for Money {
    fn combine(self, other: Self) -> Self {
        Self::new(self.value + other.value)
    }

    fn combine_ref(&self, other: &Self) -> Self {
        Self::new(self.value + other.value)
    }
}

/// The identity element is `-0.0`, which compares equal to [`Money::ZERO`].
impl Monoid for Money {
    fn empty() -> Self {
        Self::new(f64::ZERO)
    }
}
