//! Canonical rendering of floating-point values.

/// Renders an `f64` in its canonical textual form.
///
/// The rendering uses the shortest digit sequence that reads back to the
/// same value, and always carries a decimal point or an exponent:
///
/// | value | rendering |
/// |---|---|
/// | `3.5` | `3.5` |
/// | `0.0` | `0.0` |
/// | `-0.0` | `-0.0` |
/// | `1e16` | `1e16` |
/// | `f64::INFINITY` | `inf` |
/// | `f64::NAN` | `NaN` |
///
/// # Examples
///
/// ```rust
/// use tally::describe::describe_float;
///
/// assert_eq!(describe_float(-1.25), "-1.25");
/// assert_eq!(describe_float(0.0), "0.0");
/// assert_eq!(describe_float(f64::NEG_INFINITY), "-inf");
/// ```
#[must_use]
pub fn describe_float(value: f64) -> String {
    format!("{value:?}")
}
