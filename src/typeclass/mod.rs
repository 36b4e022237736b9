//! Type class traits for combining amounts.
//!
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//! - [`Sum`]: Wrapper selecting the additive monoid for plain numbers
//! - [`AdditiveIdentity`]: The zero a `Sum` starts from
//!
//! # Examples
//!
//! ```rust
//! use tally::typeclass::{Monoid, Semigroup, Sum};
//!
//! let subtotal = Sum::new(2.0).combine(Sum::new(1.5));
//! assert_eq!(subtotal, Sum::new(3.5));
//!
//! let total = Sum::combine_all(vec![subtotal, Sum::new(0.5)]);
//! assert_eq!(total.into_inner(), 4.0);
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{AdditiveIdentity, Sum};
