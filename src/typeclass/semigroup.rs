//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there exists an associative function
//! `combine: (T, T) -> T`. Running totals are the motivating case here:
//! adding amounts together in any grouping yields the same total.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! Floating-point addition satisfies this law exactly only when every
//! intermediate sum is representable (e.g. `0.5`, `1.25`, `3.0`).
//!
//! # Examples
//!
//! ```rust
//! use tally::typeclass::{Semigroup, Sum};
//!
//! assert_eq!(Sum::new(1.5).combine(Sum::new(2.0)), Sum::new(3.5));
//! assert_eq!(String::from("3.5").combine(String::from(" USD")), "3.5 USD");
//! ```

use std::iter;
use std::num::NonZeroUsize;
use std::ops::Add;

use super::wrappers::Sum;

/// Values that can be totalled: two of them combine into one of the same type.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
///
/// # Examples
///
/// ```rust
/// use tally::typeclass::{Semigroup, Sum};
///
/// let total = Sum::new(10_i64).combine(Sum::new(5));
/// assert_eq!(total.into_inner(), 15);
/// ```
pub trait Semigroup {
    /// Adds `other` onto this running total.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Totals two borrowed amounts, leaving both untouched.
    ///
    /// Types that are cheap to add in place override this to skip the clones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally::typeclass::Semigroup;
    ///
    /// let label = String::from("amount: ");
    /// let value = String::from("3.5");
    /// assert_eq!(label.combine_ref(&value), "amount: 3.5");
    /// assert_eq!(label, "amount: ");
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Totals `times` entries of the same amount.
    ///
    /// Entries are added one after another from the left, so float totals
    /// match a ledger holding `times` copies of the amount.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::NonZeroUsize;
    /// use tally::typeclass::{Semigroup, Sum};
    ///
    /// let four = NonZeroUsize::new(4).unwrap();
    /// assert_eq!(Sum::new(2.5).combine_n(four), Sum::new(10.0));
    /// ```
    #[must_use]
    fn combine_n(self, times: NonZeroUsize) -> Self
    where
        Self: Clone,
    {
        iter::repeat_n(self.clone(), times.get() - 1).fold(self, Self::combine)
    }

    /// Totals a ledger that may be empty.
    ///
    /// An empty ledger has no total here; [`Monoid::combine_all`](super::Monoid::combine_all)
    /// falls back to the identity instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally::typeclass::{Semigroup, Sum};
    ///
    /// let amounts = vec![Sum::new(1.0), Sum::new(2.0), Sum::new(0.5)];
    /// assert_eq!(Sum::reduce_all(amounts), Some(Sum::new(3.5)));
    ///
    /// let none: Vec<Sum<f64>> = vec![];
    /// assert_eq!(Sum::reduce_all(none), None);
    /// ```
    fn reduce_all<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        let mut amounts = amounts.into_iter();
        let first = amounts.next()?;
        Some(amounts.fold(first, Self::combine))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Option Implementation
// =============================================================================

/// `None` is absorbed: `Some(a).combine(None) == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

// =============================================================================
// Sum Implementation
// =============================================================================

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
