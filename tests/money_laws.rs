#![cfg(feature = "money")]
//! Property-based tests for Money.
//!
//! This module verifies the value-type and rendering properties of Money
//! using proptest.

use proptest::prelude::*;
use tally::describe::Describable;
use tally::money::Money;
use tally::typeclass::{Monoid, Semigroup, Sum};

fn finite() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

/// Values whose sums stay exact: multiples of 1/4 well inside the mantissa.
fn quarter() -> impl Strategy<Value = f64> {
    (-1_000_000_i32..1_000_000).prop_map(|units| f64::from(units) / 4.0)
}

// =============================================================================
// Construction and Rendering
// =============================================================================

proptest! {
    /// Construction stores the given value unchanged
    #[test]
    fn prop_construction_stores_value(value in finite()) {
        prop_assert_eq!(Money::new(value).value, value);
    }

    /// The same amount describes identically every time
    #[test]
    fn prop_describe_is_deterministic(value in any::<f64>()) {
        prop_assert_eq!(Money::new(value).describe(), Money::new(value).describe());
    }

    /// Money describes exactly as its amount does
    #[test]
    fn prop_describe_matches_float(value in any::<f64>()) {
        prop_assert_eq!(Money::new(value).describe(), value.describe());
    }

    /// Display agrees with describe
    #[test]
    fn prop_display_matches_describe(value in any::<f64>()) {
        let money = Money::new(value);
        prop_assert_eq!(money.to_string(), money.describe());
    }

    /// Finite descriptions parse back to the same amount
    #[test]
    fn prop_description_parses_back(value in finite()) {
        let money = Money::new(value);
        prop_assert_eq!(money.describe().parse::<Money>(), Ok(money));
    }

    /// Finite descriptions always carry a decimal point or an exponent
    #[test]
    fn prop_description_is_never_integer_shaped(value in finite()) {
        let rendered = Money::new(value).describe();
        prop_assert!(rendered.contains('.') || rendered.contains('e'), "{}", rendered);
    }
}

// =============================================================================
// Value Semantics
// =============================================================================

proptest! {
    /// Mutating a copy never affects the original
    #[test]
    fn prop_copies_are_independent(original in finite(), replacement in finite()) {
        let held = Money::new(original);
        let mut copy = held;
        copy.value = replacement;

        prop_assert_eq!(held.value, original);
        prop_assert_eq!(copy.value, replacement);
    }
}

// =============================================================================
// Monoid Laws
// =============================================================================

proptest! {
    /// Left and right identity, bit for bit (signed zeros included)
    #[test]
    fn prop_money_identity(value in prop_oneof![finite(), Just(-0.0), Just(0.0)]) {
        let money = Money::new(value);

        prop_assert_eq!(Money::empty().combine(money).value.to_bits(), value.to_bits());
        prop_assert_eq!(money.combine(Money::empty()).value.to_bits(), value.to_bits());
        prop_assert_eq!(Money::empty().combine(money).describe(), money.describe());
    }

    /// Bit-identical amounts describe identically
    #[test]
    fn prop_bit_identical_amounts_describe_identically(value in any::<f64>()) {
        let copy = Money::new(f64::from_bits(value.to_bits()));
        prop_assert_eq!(copy.describe(), Money::new(value).describe());
    }

    /// Associativity over exactly representable amounts
    #[test]
    fn prop_money_associativity(a in quarter(), b in quarter(), c in quarter()) {
        let (a, b, c) = (Money::new(a), Money::new(b), Money::new(c));

        prop_assert_eq!(a.combine(b).combine(c), a.combine(b.combine(c)));
    }

    /// Totalling Money agrees with totalling the bare amounts in Sum
    #[test]
    fn prop_combine_all_agrees_with_sum(
        amounts in prop::collection::vec(quarter(), 0..20)
    ) {
        let money_total = Money::combine_all(amounts.iter().copied().map(Money::new));
        let sum_total = Sum::combine_all(amounts.iter().copied().map(Sum::new));

        prop_assert_eq!(money_total.value.to_bits(), sum_total.into_inner().to_bits());
    }

    /// Sum<f64> identity, bit for bit
    #[test]
    fn prop_sum_identity(value in prop_oneof![finite(), Just(-0.0), Just(0.0)]) {
        let sum = Sum::new(value);

        prop_assert_eq!(Sum::<f64>::empty().combine(sum).into_inner().to_bits(), value.to_bits());
        prop_assert_eq!(sum.combine(Sum::empty()).into_inner().to_bits(), value.to_bits());
    }
}
