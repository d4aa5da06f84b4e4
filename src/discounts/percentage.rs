//! Percentage Discount

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use super::{Discount, round_currency};

/// Takes a percentage off the amount.
///
/// Unlike [`FixedDiscount`](super::FixedDiscount) the result is not clamped, so a percentage over
/// 100 yields a negative total.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PercentageDiscount {
    percentage: Percentage,
}

impl PercentageDiscount {
    /// Create a new percentage discount from percent points, e.g. `10` for 10% off.
    pub fn new(points: Decimal) -> Self {
        Self::from_fraction(Percentage::from(points / Decimal::ONE_HUNDRED))
    }

    /// Create a new percentage discount from a fractional percentage, e.g. `0.1` for 10% off.
    pub fn from_fraction(percentage: Percentage) -> Self {
        Self { percentage }
    }

    /// Returns the fractional percentage taken off
    pub fn percentage(&self) -> Percentage {
        self.percentage
    }
}

impl Discount for PercentageDiscount {
    fn apply_discount(&self, amount: Decimal) -> Decimal {
        let fraction = self.percentage * Decimal::ONE;

        round_currency(amount.saturating_sub(amount.saturating_mul(fraction)))
    }
}
