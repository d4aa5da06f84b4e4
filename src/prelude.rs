//! Checkout prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, Cart, RemoveOutcome},
    discounts::{Discount, FixedDiscount, PercentageDiscount, round_currency},
    fixtures::{Fixture, FixtureError},
    items::{Item, ItemError},
    receipt::{Receipt, ReceiptError, ReceiptLine},
};
