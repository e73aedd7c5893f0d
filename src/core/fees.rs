//! Fee calculation for a selection of courses
//!
//! The discount depends only on how many courses are selected:
//!
//! | Courses selected | Discount |
//! |------------------|----------|
//! | 0 or 1           | 0%       |
//! | 2                | 5%       |
//! | 3                | 10%      |
//! | 4 or more        | 15%      |

use crate::core::models::{PriceLookup, Selection};
use crate::core::money::{format_currency, Money, Rate};
use serde::Serialize;

/// Discount tiers as (minimum course count, rate in basis points), highest first
const DISCOUNT_TIERS_BP: [(usize, u32); 3] = [(4, 1_500), (3, 1_000), (2, 500)];

/// Discount rate for a number of selected courses
#[must_use]
pub fn discount_rate(course_count: usize) -> Rate {
    DISCOUNT_TIERS_BP
        .iter()
        .find(|(min_count, _)| course_count >= *min_count)
        .map_or(Rate::ZERO, |(_, bp)| Rate::from_basis_points(*bp))
}

/// Computed fees for one snapshot of a selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    /// Sum of the prices of all known selected courses
    pub subtotal: Money,
    /// Rate chosen from the number of selected courses
    pub discount_rate: Rate,
    /// `subtotal * discount_rate`, rounded to the cent
    pub discount_amount: Money,
    /// `subtotal - discount_amount`
    pub total: Money,
}

impl FeeBreakdown {
    /// Build a breakdown from a subtotal and the number of selected courses
    #[must_use]
    pub fn from_subtotal(subtotal: Money, course_count: usize) -> Self {
        let discount_rate = discount_rate(course_count);
        let discount_amount = subtotal.apply_rate(discount_rate);
        Self {
            subtotal,
            discount_rate,
            discount_amount,
            total: subtotal - discount_amount,
        }
    }

    /// Label/value rows for display, amounts formatted with `symbol`
    #[must_use]
    pub fn summary_lines(&self, symbol: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Subtotal", format_currency(self.subtotal, symbol)),
            ("Discount rate", self.discount_rate.to_string()),
            ("Discount", format_currency(self.discount_amount, symbol)),
            ("Total", format_currency(self.total, symbol)),
        ]
    }
}

/// Calculate the fees for a selection
///
/// Identifiers missing from `prices` add nothing to the subtotal but still
/// count towards the discount tier. An empty selection gives an all-zero
/// breakdown.
///
/// # Examples
/// ```
/// use course_fees::core::fees::calculate;
/// use course_fees::core::models::{Catalog, Selection};
///
/// let selection: Selection = ["first-aid", "cooking"].into_iter().collect();
/// let fees = calculate(&selection, Catalog::standard());
/// assert_eq!(fees.total.to_string(), "2137.50");
/// ```
#[must_use]
pub fn calculate<P: PriceLookup + ?Sized>(selection: &Selection, prices: &P) -> FeeBreakdown {
    let subtotal: Money = selection
        .iter()
        .map(|id| prices.price_of(id).unwrap_or(Money::ZERO))
        .sum();
    FeeBreakdown::from_subtotal(subtotal, selection.len())
}
