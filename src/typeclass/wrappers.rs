//! Newtype wrappers that pick a single monoid for plain numbers.
//!
//! A bare `f64` can be combined by addition, multiplication, maximum and so
//! on, so it gets no `Semigroup` instance of its own. Wrapping it in [`Sum`]
//! selects addition with zero as the identity.
//!
//! # The AdditiveIdentity Trait
//!
//! [`AdditiveIdentity`] supplies the zero that `Sum` starts from. Floats use
//! `-0.0`: it is the only zero with `-0.0 + x` bit-identical to `x` for every
//! `x`, so a total of a single `-0.0` keeps its sign.

/// A newtype wrapper that represents the additive semigroup/monoid.
///
/// `Sum(a).combine(Sum(b))` equals `Sum(a + b)`, and the identity element is
/// `Sum(A::ZERO)` (see [`AdditiveIdentity`]).
///
/// # Examples
///
/// ```rust
/// use tally::typeclass::{Monoid, Semigroup, Sum};
///
/// let a = Sum::new(3.5);
/// let b = Sum::new(-1.25);
///
/// assert_eq!(a.combine(b).into_inner(), 2.25);
/// assert_eq!(Sum::<f64>::empty().into_inner().to_bits(), (-0.0_f64).to_bits());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Creates a new `Sum` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Sum` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// AdditiveIdentity Trait
// =============================================================================

/// A trait for types with a zero that leaves every value unchanged under `+`.
///
/// # Laws
///
/// For all `x`, `Self::ZERO + x` is identical to `x`. For floats that means
/// bit-identical, which rules out `0.0` (`0.0 + -0.0` is `0.0`).
///
/// # Examples
///
/// ```rust
/// use tally::typeclass::AdditiveIdentity;
///
/// assert_eq!(i64::ZERO, 0);
/// assert_eq!((f64::ZERO + -0.0).to_bits(), (-0.0_f64).to_bits());
/// ```
pub trait AdditiveIdentity {
    /// The additive identity of this type.
    const ZERO: Self;
}

macro_rules! impl_additive_identity {
    ($zero:expr => $($numeric:ty),* $(,)?) => {
        $(
            impl AdditiveIdentity for $numeric {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_additive_identity!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_additive_identity!(-0.0 => f32, f64);

/// A running total describes as its current value.
#[cfg(feature = "describe")]
impl<A: crate::describe::Describable> crate::describe::Describable for Sum<A> {
    fn describe(&self) -> String {
        self.0.describe()
    }
}
