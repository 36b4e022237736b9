//! The `Describable` capability: values that render themselves as text.
//!
//! This module provides:
//!
//! - [`Describable`]: The "describe yourself as a string" contract
//! - [`Described`]: A `Display` adapter over any describable value
//! - [`describe_float`]: The canonical floating-point rendering
//!
//! ## Canonical Float Rendering
//!
//! Floating-point values always render with a decimal point or an exponent,
//! so `0.0` never collapses to `0`. Non-finite values render as `inf`,
//! `-inf` and `NaN`.
//!
//! # Examples
//!
//! ```rust
//! use tally::describe::Describable;
//!
//! assert_eq!(3.5_f64.describe(), "3.5");
//! assert_eq!(0.0_f64.describe(), "0.0");
//! assert_eq!(42_i32.describe(), "42");
//! assert_eq!(format!("[{}]", (-1.25_f64).described()), "[-1.25]");
//! ```

mod describable;
mod float;

pub use describable::{Describable, Described};
pub use float::describe_float;
