//! Fixed Discount

use rust_decimal::Decimal;

use super::{Discount, round_currency};

/// Subtracts a fixed amount, never going below zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FixedDiscount {
    amount: Decimal,
}

impl FixedDiscount {
    /// Create a new fixed amount discount.
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Returns the amount subtracted
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Discount for FixedDiscount {
    fn apply_discount(&self, amount: Decimal) -> Decimal {
        round_currency(amount.saturating_sub(self.amount)).max(Decimal::ZERO)
    }
}
