//! Integration tests for fee calculation over the standard catalog

use course_fees::core::fees::{calculate, discount_rate, FeeBreakdown};
use course_fees::core::models::{Catalog, CourseCategory, Selection};
use course_fees::core::money::{format_currency, Money, Rate};
use course_fees::core::quote::{Quote, QuoteError};

fn fees_for(ids: &[&str]) -> FeeBreakdown {
    let selection: Selection = ids.iter().copied().collect();
    calculate(&selection, Catalog::standard())
}

#[test]
fn worked_examples() {
    let cases: [(&[&str], u64, u32, u64, u64); 5] = [
        (&[], 0, 0, 0, 0),
        (&["first-aid"], 150_000, 0, 0, 150_000),
        (&["first-aid", "cooking"], 225_000, 500, 11_250, 213_750),
        (
            &["first-aid", "sewing", "landscaping"],
            450_000,
            1_000,
            45_000,
            405_000,
        ),
        (
            &["first-aid", "sewing", "landscaping", "life-skills"],
            600_000,
            1_500,
            90_000,
            510_000,
        ),
    ];

    for (ids, subtotal, rate_bp, discount, total) in cases {
        let fees = fees_for(ids);
        assert_eq!(fees.subtotal.cents(), subtotal, "{ids:?}");
        assert_eq!(fees.discount_rate.basis_points(), rate_bp, "{ids:?}");
        assert_eq!(fees.discount_amount.cents(), discount, "{ids:?}");
        assert_eq!(fees.total.cents(), total, "{ids:?}");
    }
}

#[test]
fn every_catalog_subset_keeps_invariants() {
    let ids: Vec<&str> = Catalog::standard().ids().collect();
    for mask in 0u32..(1 << ids.len()) {
        let chosen: Vec<&str> = ids
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, id)| *id)
            .collect();
        let fees = fees_for(&chosen);

        let expected_subtotal: Money = chosen
            .iter()
            .filter_map(|id| Catalog::standard().get(id))
            .map(|c| c.price())
            .sum();
        assert_eq!(fees.subtotal, expected_subtotal);
        assert_eq!(fees.discount_rate, discount_rate(chosen.len()));
        assert_eq!(fees.discount_amount, fees.subtotal.apply_rate(fees.discount_rate));
        assert_eq!(fees.total + fees.discount_amount, fees.subtotal);
        assert!(fees.total <= fees.subtotal);
    }
}

#[test]
fn all_six_week_courses() {
    let selection: Selection = Catalog::standard()
        .by_category(CourseCategory::SixWeek)
        .map(|c| c.id.as_str())
        .collect();
    let fees = calculate(&selection, Catalog::standard());
    assert_eq!(fees.subtotal, Money::from_units(2250));
    assert_eq!(fees.discount_rate, Rate::from_percent(10));
    assert_eq!(format_currency(fees.total, "R"), "R2025.00");
}

#[test]
fn quote_guard_and_toggle_flow() {
    let mut selection = Selection::new();
    assert_eq!(
        Quote::prepare(&selection, Catalog::standard()),
        Err(QuoteError::EmptySelection)
    );

    selection.toggle("child-minding");
    selection.toggle("garden-maintenance");
    let quote = Quote::prepare(&selection, Catalog::standard()).unwrap();
    assert_eq!(quote.fees.total, Money::from_units(1425));

    selection.toggle("child-minding");
    let quote = Quote::prepare(&selection, Catalog::standard()).unwrap();
    assert_eq!(quote.fees.total, Money::from_units(750));
}
