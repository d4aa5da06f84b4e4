//! Items

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the validating item constructor.
#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    /// The item name was empty.
    #[error("item name must not be empty")]
    EmptyName,

    /// The unit price was below zero (name, price).
    #[error("item {0} has negative price {1}")]
    NegativePrice(String, Decimal),

    /// The quantity was zero or below (name, quantity).
    #[error("item {0} has invalid quantity {1}")]
    InvalidQuantity(String, i64),
}

/// A named, priced, countable cart line.
///
/// The name is the merge key inside a [`Cart`](crate::cart::Cart). Only the cart may change an
/// item's quantity once it has been added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    name: String,
    price: Decimal,
    quantity: i64,
}

impl Item {
    /// Creates a new item with a quantity of one.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self::with_quantity(name, price, 1)
    }

    /// Creates a new item with the given quantity.
    ///
    /// No validation is applied: negative prices and quantities are kept as given.
    pub fn with_quantity(name: impl Into<String>, price: Decimal, quantity: i64) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Creates a new item, rejecting values a till would refuse.
    ///
    /// # Errors
    ///
    /// - [`ItemError::EmptyName`]: the name is empty.
    /// - [`ItemError::NegativePrice`]: the price is below zero.
    /// - [`ItemError::InvalidQuantity`]: the quantity is zero or negative.
    pub fn try_new(
        name: impl Into<String>,
        price: Decimal,
        quantity: i64,
    ) -> Result<Self, ItemError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }

        if price < Decimal::ZERO {
            return Err(ItemError::NegativePrice(name, price));
        }

        if quantity <= 0 {
            return Err(ItemError::InvalidQuantity(name, quantity));
        }

        Ok(Self::with_quantity(name, price, quantity))
    }

    /// Returns the name of the item
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity of the item
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Returns `price * quantity`, unrounded. Saturates at the bounds of [`Decimal`].
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    pub(crate) fn add_quantity(&mut self, quantity: i64) {
        self.quantity = self.quantity.saturating_add(quantity);
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_defaults_quantity_to_one() {
        let item = Item::new("Peach", Decimal::new(100, 2));

        assert_eq!(item.name(), "Peach");
        assert_eq!(item.price(), Decimal::ONE);
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn with_quantity_keeps_negative_values() {
        let item = Item::with_quantity("Refund", Decimal::new(-250, 2), -3);

        assert_eq!(item.price(), Decimal::new(-250, 2));
        assert_eq!(item.quantity(), -3);
    }

    #[test]
    fn line_total_is_price_times_quantity() {
        let item = Item::with_quantity("Apple", Decimal::new(150, 2), 2);

        assert_eq!(item.line_total(), Decimal::new(300, 2));
    }

    #[test]
    fn add_quantity_increments_in_place() {
        let mut item = Item::with_quantity("Banana", Decimal::new(50, 2), 3);

        item.add_quantity(2);

        assert_eq!(item.quantity(), 5);
    }

    #[test]
    fn add_quantity_saturates() {
        let mut item = Item::with_quantity("Bulk", Decimal::ONE, i64::MAX);

        item.add_quantity(1);

        assert_eq!(item.quantity(), i64::MAX);
    }

    #[test]
    fn line_total_saturates() {
        assert_eq!(
            Item::with_quantity("Gold", Decimal::MAX, 2).line_total(),
            Decimal::MAX
        );
        assert_eq!(
            Item::with_quantity("Debt", Decimal::MAX, -2).line_total(),
            Decimal::MIN
        );
    }

    #[test]
    fn try_new_accepts_valid_items() -> TestResult {
        let item = Item::try_new("Mango", Decimal::new(200, 2), 1)?;

        assert_eq!(item, Item::new("Mango", Decimal::new(200, 2)));

        Ok(())
    }

    #[test]
    fn try_new_accepts_free_items() -> TestResult {
        let item = Item::try_new("Sample", Decimal::ZERO, 1)?;

        assert_eq!(item.line_total(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn try_new_rejects_empty_name() {
        assert_eq!(
            Item::try_new("", Decimal::ONE, 1),
            Err(ItemError::EmptyName)
        );
    }

    #[test]
    fn try_new_rejects_negative_price() {
        assert_eq!(
            Item::try_new("Pear", Decimal::new(-1, 0), 1),
            Err(ItemError::NegativePrice("Pear".to_string(), Decimal::new(-1, 0)))
        );
    }

    #[test]
    fn try_new_rejects_non_positive_quantity() {
        assert!(matches!(
            Item::try_new("Plum", Decimal::ONE, 0),
            Err(ItemError::InvalidQuantity(_, 0))
        ));
        assert!(matches!(
            Item::try_new("Plum", Decimal::ONE, -2),
            Err(ItemError::InvalidQuantity(_, -2))
        ));
    }
}
