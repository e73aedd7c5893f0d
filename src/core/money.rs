//! Currency amounts and percentage rates
//!
//! Prices in the catalog are whole currency units (1500, 750). Amounts are
//! held in cents so that discounts such as 5% of 2250 stay exact, and rates
//! are held in basis points (1 bp = 0.01%).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

const CENTS_PER_UNIT: u64 = 100;
const BASIS_POINTS_PER_WHOLE: u64 = 10_000;

/// A non-negative currency amount stored in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Create an amount from whole currency units (e.g. `1500`), saturating
    /// at the largest representable amount
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(CENTS_PER_UNIT))
    }

    /// Create an amount from cents
    #[must_use]
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Amount in cents
    #[must_use]
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Whole currency units, truncating any cents
    #[must_use]
    pub const fn units(self) -> u64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns `true` for a zero amount
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Apply a rate to this amount, rounding half-up to the nearest cent
    ///
    /// The product is taken in `u128`; a result above the largest amount
    /// saturates.
    ///
    /// # Examples
    /// ```
    /// use course_fees::core::money::{Money, Rate};
    ///
    /// let discount = Money::from_units(2250).apply_rate(Rate::from_percent(5));
    /// assert_eq!(discount.cents(), 11_250);
    /// ```
    #[must_use]
    pub fn apply_rate(self, rate: Rate) -> Self {
        let whole = u128::from(BASIS_POINTS_PER_WHOLE);
        let scaled = u128::from(self.0) * u128::from(rate.basis_points());
        let rounded = (scaled + whole / 2) / whole;
        Self(u64::try_from(rounded).unwrap_or(u64::MAX))
    }

    /// Add, clamping at the largest representable amount
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtract, clamping at zero
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.saturating_add(rhs)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.saturating_sub(rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / CENTS_PER_UNIT,
            self.0 % CENTS_PER_UNIT
        )
    }
}

/// A percentage rate stored in basis points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// 0%
    pub const ZERO: Self = Self(0);

    /// Create a rate from whole percent (e.g. `15` for 15%)
    #[must_use]
    pub const fn from_percent(percent: u32) -> Self {
        Self(percent * 100)
    }

    /// Create a rate from basis points
    #[must_use]
    pub const fn from_basis_points(bp: u32) -> Self {
        Self(bp)
    }

    /// Rate in basis points
    #[must_use]
    pub const fn basis_points(self) -> u32 {
        self.0
    }

    /// Rate as a fraction (0.05 for 5%)
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        f64::from(self.0) / 10_000.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}.{:02}%", self.0 / 100, self.0 % 100)
        }
    }
}

/// Format an amount as two-decimal fixed point prefixed with a currency symbol
///
/// # Examples
/// ```
/// use course_fees::core::money::{format_currency, Money};
///
/// assert_eq!(format_currency(Money::from_cents(213_750), "R"), "R2137.50");
/// ```
#[must_use]
pub fn format_currency(amount: Money, symbol: &str) -> String {
    format!("{symbol}{amount}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let m = Money::from_units(1500);
        assert_eq!(m.cents(), 150_000);
        assert_eq!(m.units(), 1500);
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Money::from_cents(11_250).to_string(), "112.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_apply_rate_rounds_half_up() {
        // 0.15 * 0.03 = 0.0045 -> 0.00; 0.15 * 0.10 = 0.015 -> 0.02
        assert_eq!(Money::from_cents(3).apply_rate(Rate::from_percent(15)).cents(), 0);
        assert_eq!(Money::from_cents(10).apply_rate(Rate::from_percent(15)).cents(), 2);
    }

    #[test]
    fn test_apply_zero_rate() {
        assert_eq!(Money::from_units(1500).apply_rate(Rate::ZERO), Money::ZERO);
    }

    #[test]
    fn test_apply_rate_on_huge_amounts() {
        // 2e17 cents * 1500 bp does not fit in u64 before dividing
        let huge = Money::from_units(2_000_000_000_000_000);
        assert_eq!(
            huge.apply_rate(Rate::from_percent(15)).cents(),
            30_000_000_000_000_000
        );
        assert_eq!(
            Money::from_cents(u64::MAX).apply_rate(Rate::from_percent(200)),
            Money::from_cents(u64::MAX)
        );
    }

    #[test]
    fn test_add_and_from_units_saturate() {
        assert_eq!(
            Money::from_cents(u64::MAX) + Money::from_cents(1),
            Money::from_cents(u64::MAX)
        );
        assert_eq!(Money::from_units(u64::MAX).cents(), u64::MAX);
    }

    #[test]
    fn test_sub_saturates() {
        assert_eq!(Money::from_units(1) - Money::from_units(2), Money::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_units(1500), Money::from_units(750)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_units(2250));
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_percent(5).to_string(), "5%");
        assert_eq!(Rate::from_basis_points(1250).to_string(), "12.50%");
        assert!((Rate::from_percent(10).as_fraction() - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Money::from_units(4050), "R"), "R4050.00");
        assert_eq!(format_currency(Money::from_cents(99), "$"), "$0.99");
    }
}
