//! Checkout
//!
//! A shopping cart that merges line items by name, and interchangeable discount strategies that
//! turn its subtotal into a payable total.
//!
//! ```
//! use checkout::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let mut cart = Cart::new();
//!
//! cart.add_item(Item::new("Item1", Decimal::new(10, 0)));
//! cart.add_item(Item::new("Item2", Decimal::new(20, 0)));
//!
//! assert_eq!(cart.subtotal(), Decimal::new(30, 0));
//! assert_eq!(
//!     cart.apply_discount(&PercentageDiscount::new(Decimal::TEN)),
//!     Decimal::new(2700, 2)
//! );
//! ```

pub mod cart;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod logging;
pub mod prelude;
pub mod receipt;
pub mod utils;
