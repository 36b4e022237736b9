#![cfg(all(feature = "money", feature = "derive"))]
//! Integration tests for tally.
//!
//! These tests verify the public API works across module boundaries
//! through the prelude.

use rstest::rstest;
use tally::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Describable)]
struct Invoice {
    total: Money,
}

#[rstest]
#[case(3.5, "3.5")]
#[case(0.0, "0.0")]
#[case(-1.25, "-1.25")]
fn money_describes_through_prelude(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(Money::new(value).describe(), expected);
    assert_eq!(Money::new(value).to_string(), expected);
}

#[rstest]
fn parsed_ledger_totals_and_describes() {
    let ledger: Result<Vec<Money>, ParseMoneyError> =
        ["10.0", "-2.5", " 0.25 "].iter().map(|line| line.parse()).collect();

    let invoice = Invoice {
        total: Money::combine_all(ledger.unwrap()),
    };

    assert_eq!(invoice.describe(), "7.75");
    assert_eq!(format!("due: {}", invoice.described()), "due: 7.75");
}

#[rstest]
fn a_bad_line_fails_the_whole_ledger() {
    let ledger: Result<Vec<Money>, ParseMoneyError> =
        ["1.0", "two", "3.0"].iter().map(|line| line.parse()).collect();

    assert!(matches!(
        ledger,
        Err(ParseMoneyError::InvalidAmount { ref input, .. }) if input == "two"
    ));
}

#[rstest]
fn sum_and_money_render_the_same_total() {
    let amounts = [1.5, 2.0, -0.25];

    let money = Money::combine_all(amounts.map(Money::new));
    let sum = Sum::combine_all(amounts.map(Sum::new));

    assert_eq!(money.describe(), sum.describe());
    assert_eq!(money.describe(), "3.25");
}

#[rstest]
fn held_copies_stay_isolated_across_calls() {
    fn bump(mut money: Money) -> Money {
        money.value += 1.0;
        money
    }

    let original = Money::new(3.5);
    let bumped = bump(original);

    assert_eq!(original.describe(), "3.5");
    assert_eq!(bumped.describe(), "4.5");
}

#[rstest]
#[case("thiserror")]
#[case("tracing")]
fn money_only_dependencies_are_optional(#[case] dependency: &str) {
    let manifest = include_str!("../Cargo.toml");
    let dependencies = manifest
        .split("[dependencies]")
        .nth(1)
        .and_then(|rest| rest.split("\n[").next())
        .unwrap();

    let entry = dependencies
        .lines()
        .find(|line| line.starts_with(&format!("{dependency} =")))
        .unwrap();
    assert!(entry.contains("optional = true"), "{entry}");

    let money_feature = manifest
        .lines()
        .find(|line| line.starts_with("money ="))
        .unwrap();
    assert!(money_feature.contains(&format!("\"dep:{dependency}\"")), "{money_feature}");
}
