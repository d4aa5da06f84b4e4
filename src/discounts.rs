//! Discounts
//!
//! A discount is a pure mapping from an amount to a discounted amount. The cart hands its subtotal
//! to whichever strategy the caller picks and returns the result unchanged, so all rounding and
//! clamping policy lives in the strategies themselves.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

pub mod fixed;
pub mod percentage;

pub use fixed::FixedDiscount;
pub use percentage::PercentageDiscount;

/// Number of decimal places discounted totals are rounded to.
pub const CURRENCY_DP: u32 = 2;

/// A pricing strategy applied once to a cart subtotal.
pub trait Discount: fmt::Debug {
    /// Returns the discounted amount.
    fn apply_discount(&self, amount: Decimal) -> Decimal;
}

impl<D: Discount + ?Sized> Discount for &D {
    fn apply_discount(&self, amount: Decimal) -> Decimal {
        (**self).apply_discount(amount)
    }
}

impl<D: Discount + ?Sized> Discount for Box<D> {
    fn apply_discount(&self, amount: Decimal) -> Decimal {
        (**self).apply_discount(amount)
    }
}

/// Round an amount to whole cents, halves away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}
