//! Monoid type class - semigroups with an identity element.
//!
//! A monoid adds to a [`Semigroup`] an identity element `empty` such that,
//! for all `a`:
//!
//! - `empty.combine(a) == a` (left identity)
//! - `a.combine(empty) == a` (right identity)
//!
//! With an identity at hand, any number of values can be totalled, including
//! none at all.
//!
//! # Examples
//!
//! ```rust
//! use tally::typeclass::{Monoid, Sum};
//!
//! let ledger = vec![Sum::new(3.5), Sum::new(-1.25), Sum::new(0.75)];
//! assert_eq!(Sum::combine_all(ledger), Sum::new(3.0));
//!
//! let nothing: Vec<Sum<f64>> = Vec::new();
//! assert_eq!(Sum::combine_all(nothing), Sum::new(0.0));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{AdditiveIdentity, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// ## Left Identity
///
/// ```text
/// Self::empty().combine(a) == a
/// ```
///
/// ## Right Identity
///
/// ```text
/// a.combine(Self::empty()) == a
/// ```
///
/// Float-backed instances hold these laws bit-for-bit, so `-0.0` survives
/// being combined with the identity.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally::typeclass::{Monoid, Sum};
    ///
    /// assert_eq!(String::empty(), "");
    /// assert_eq!(Sum::<f64>::empty(), Sum::new(0.0));
    /// ```
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally::typeclass::{Monoid, Sum};
    ///
    /// assert!(Sum::new(0.0).is_empty_value());
    /// assert!(!Sum::new(0.01).is_empty_value());
    /// ```
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

/// The identity element is `None`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// Sum forms a monoid under addition with `A::ZERO` as the identity.
impl<A: Add<Output = A> + AdditiveIdentity> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::ZERO)
    }
}
