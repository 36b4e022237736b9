//! # tally
//!
//! A money value type that describes itself as text, with literal
//! conversions and monoidal aggregation.
//!
//! ## Overview
//!
//! - **Describable**: The "describe yourself as a string" capability, with
//!   a canonical floating-point rendering (`0.0`, `3.5`, `-1.25`)
//! - **Money**: A `Copy` value type wrapping an unconstrained `f64`
//! - **Type Classes**: `Semigroup` and `Monoid` for totalling amounts
//! - **Derive**: `#[derive(Describable)]` for single-field wrapper types
//!
//! ## Feature Flags
//!
//! - `describe`: The `Describable` trait and float rendering
//! - `typeclass`: `Semigroup`, `Monoid` and `Sum`
//! - `money`: The `Money` value type (enables `describe` and `typeclass`)
//! - `derive`: `#[derive(Describable)]`
//! - `serde`: Transparent `Serialize`/`Deserialize` for `Money`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use tally::prelude::*;
//!
//! let money = Money::new(3.5);
//! assert_eq!(money.describe(), "3.5");
//! assert_eq!(Money::new(0.0).to_string(), "0.0");
//!
//! let total = Money::combine_all([money, Money::new(-1.25)]);
//! assert_eq!(total.describe(), "2.25");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use tally::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "describe")]
    pub use crate::describe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "money")]
    pub use crate::money::*;

    #[cfg(feature = "derive")]
    pub use tally_derive::Describable;
}

#[cfg(feature = "describe")]
pub mod describe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "money")]
pub mod money;

#[cfg(feature = "derive")]
pub use tally_derive::Describable;
