//! The `Describable` trait and its standard implementations.

use std::fmt;

use super::float::describe_float;

/// A type that can render itself as a human-readable string.
///
/// `Describable` is a capability rather than a formatting hook: a type
/// conforms by providing [`describe`](Describable::describe), and gains a
/// `Display` view through [`described`](Describable::described) for free.
///
/// # Laws
///
/// ## Determinism
///
/// For all `a`, `b` holding identical values:
/// ```text
/// a.describe() == b.describe()
/// ```
///
/// For floating-point data "identical" means bit-identical
/// (`a.to_bits() == b.to_bits()`), not `==`. `0.0 == -0.0` holds, yet the
/// two describe as `"0.0"` and `"-0.0"`.
///
/// ## Display Agreement
///
/// ```text
/// a.described().to_string() == a.describe()
/// ```
///
/// # Examples
///
/// ```rust
/// use tally::describe::Describable;
///
/// struct Celsius(f64);
///
/// impl Describable for Celsius {
///     fn describe(&self) -> String {
///         format!("{}°C", self.0.describe())
///     }
/// }
///
/// assert_eq!(Celsius(21.5).describe(), "21.5°C");
/// ```
pub trait Describable {
    /// Returns the textual rendering of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally::describe::Describable;
    ///
    /// assert_eq!(true.describe(), "true");
    /// assert_eq!(String::from("abc").describe(), "abc");
    /// ```
    fn describe(&self) -> String;

    /// Returns a `Display` adapter that writes [`describe`](Describable::describe).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally::describe::Describable;
    ///
    /// let line = format!("total: {}", 3.5_f64.described());
    /// assert_eq!(line, "total: 3.5");
    /// ```
    fn described(&self) -> Described<'_, Self>
    where
        Self: Sized,
    {
        Described(self)
    }
}

/// A borrowed `Display` view of a [`Describable`] value.
///
/// Created by [`Describable::described`].
pub struct Described<'a, T: ?Sized>(&'a T);

impl<T: Describable + ?Sized> fmt::Display for Described<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0.describe())
    }
}

impl<T: Describable + ?Sized> fmt::Debug for Described<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("Described")
            .field(&self.0.describe())
            .finish()
    }
}

// =============================================================================
// Floating-Point Implementations
// =============================================================================

impl Describable for f64 {
    fn describe(&self) -> String {
        describe_float(*self)
    }
}

// Widening to f64 would expose the binary expansion (0.1f32 -> 0.10000000149011612).
impl Describable for f32 {
    fn describe(&self) -> String {
        format!("{self:?}")
    }
}

// =============================================================================
// Integer Implementations
// =============================================================================

macro_rules! impl_describable_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Describable for $integer {
                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_describable_for_integer!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

// =============================================================================
// Text and Scalar Implementations
// =============================================================================

impl Describable for bool {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describable for char {
    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Describable for str {
    fn describe(&self) -> String {
        self.to_owned()
    }
}

impl Describable for String {
    fn describe(&self) -> String {
        self.clone()
    }
}

// =============================================================================
// Pointer Implementations
// =============================================================================

impl<T: Describable + ?Sized> Describable for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Describable + ?Sized> Describable for Box<T> {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

// =============================================================================
// Tests
// =============================================================================
