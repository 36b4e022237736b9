//! Derive macro for the tally `Describable` capability.
//!
//! # Available Derive Macros
//!
//! - [`Describable`]: Describes a single-field wrapper as its field
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::describe::Describable;
//! use tally_derive::Describable;
//!
//! #[derive(Describable)]
//! struct Deposit(f64);
//!
//! assert_eq!(Deposit(3.5).describe(), "3.5");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod describable;

use proc_macro::TokenStream;

/// Derive macro for implementing `Describable` on wrapper types.
///
/// The struct must have exactly one field, named or positional. The
/// generated implementation describes the value as that field does.
///
/// # Generated Code
///
/// For a field `inner` of type `T`:
///
/// ```rust,ignore
/// impl ::tally::describe::Describable for StructName
/// where
///     T: ::tally::describe::Describable,
/// {
///     fn describe(&self) -> String {
///         ::tally::describe::Describable::describe(&self.inner)
///     }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use tally::describe::Describable;
/// use tally::money::Money;
/// use tally_derive::Describable;
///
/// #[derive(Describable)]
/// struct Refund {
///     amount: Money,
/// }
///
/// let refund = Refund { amount: Money::new(-1.25) };
/// assert_eq!(refund.describe(), "-1.25");
/// ```
///
/// # Errors
///
/// Enums, unions, unit structs, and structs with more than one field are
/// rejected at compile time.
#[proc_macro_derive(Describable)]
pub fn derive_describable(input: TokenStream) -> TokenStream {
    describable::derive_describable_impl(input)
}
