//! Cart

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::{discounts::Discount, items::Item};

/// What [`Cart::add_item`] did with the incoming item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended at the given position.
    Inserted(usize),

    /// The quantity was folded into the existing item at the given position.
    Merged(usize),
}

/// What [`Cart::remove_item`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The named item was removed and is handed back.
    Removed(Item),

    /// No item had that name; the cart is unchanged.
    NotFound,
}

/// An ordered collection of items, at most one per name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cart by adding each item in turn, merging repeated names.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut cart = Self::new();

        for item in items {
            cart.add_item(item);
        }

        cart
    }

    /// Add an item to the cart.
    ///
    /// If an item with the same name is already present its quantity grows by the incoming
    /// quantity and the incoming price is discarded. Otherwise the item goes on the end.
    pub fn add_item(&mut self, item: Item) -> AddOutcome {
        if let Some((idx, existing)) = self
            .items
            .iter_mut()
            .enumerate()
            .find(|(_, existing)| existing.name() == item.name())
        {
            existing.add_quantity(item.quantity());

            debug!(
                name = existing.name(),
                added = item.quantity(),
                quantity = existing.quantity(),
                "merged item into cart"
            );

            return AddOutcome::Merged(idx);
        }

        debug!(
            name = item.name(),
            quantity = item.quantity(),
            price = %item.price(),
            "added item to cart"
        );

        self.items.push(item);

        AddOutcome::Inserted(self.items.len() - 1)
    }

    /// Remove the first item with the given name.
    ///
    /// Removing a name that isn't in the cart does nothing.
    pub fn remove_item(&mut self, name: &str) -> RemoveOutcome {
        let Some(idx) = self.position(name) else {
            debug!(name, "item not in cart, nothing removed");

            return RemoveOutcome::NotFound;
        };

        let removed = self.items.remove(idx);

        debug!(name, quantity = removed.quantity(), "removed item from cart");

        RemoveOutcome::Removed(removed)
    }

    /// The items currently in the cart, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// An owned snapshot of the items currently in the cart.
    pub fn to_items(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Look up an item by name.
    pub fn get_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Iterate over the items in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Sum of `price * quantity` over every item; zero when empty. Not rounded.
    ///
    /// Saturates at the bounds of [`Decimal`] rather than overflowing.
    pub fn subtotal(&self) -> Decimal {
        let subtotal = self
            .items
            .iter()
            .map(Item::line_total)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        trace!(%subtotal, items = self.items.len(), "calculated subtotal");

        subtotal
    }

    /// Apply a discount strategy to the subtotal and return its result as the final total.
    pub fn apply_discount<D: Discount + ?Sized>(&self, discount: &D) -> Decimal {
        let subtotal = self.subtotal();
        let total = discount.apply_discount(subtotal);

        trace!(?discount, %subtotal, %total, "applied discount");

        total
    }

    /// Total number of units across all items, saturating at `i64::MAX`.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .map(Item::quantity)
            .fold(0, i64::saturating_add)
    }

    /// Get the number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        debug!(items = self.items.len(), "cleared cart");

        self.items.clear();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }
}

impl FromIterator<Item> for Cart {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self::with_items(iter)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::discounts::{FixedDiscount, PercentageDiscount};

    use super::*;

    fn test_items() -> [Item; 3] {
        [
            Item::with_quantity("Apple", Decimal::new(150, 2), 2),
            Item::new("Bread", Decimal::new(220, 2)),
            Item::with_quantity("Milk", Decimal::new(95, 2), 3),
        ]
    }

    fn names(cart: &Cart) -> Vec<&str> {
        cart.iter().map(Item::name).collect()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn add_item_appends_in_order() {
        let mut cart = Cart::new();

        for (idx, item) in test_items().into_iter().enumerate() {
            assert_eq!(cart.add_item(item), AddOutcome::Inserted(idx));
        }

        assert_eq!(names(&cart), ["Apple", "Bread", "Milk"]);
    }

    #[test]
    fn add_item_merges_quantity_and_keeps_first_price() {
        let mut cart = Cart::with_items(test_items());

        let outcome = cart.add_item(Item::with_quantity("Bread", Decimal::new(999, 2), 4));

        assert_eq!(outcome, AddOutcome::Merged(1));
        assert_eq!(cart.len(), 3);

        let bread = cart.get_item("Bread");

        assert_eq!(bread.map(Item::quantity), Some(5));
        assert_eq!(bread.map(Item::price), Some(Decimal::new(220, 2)));
    }

    #[test]
    fn add_item_matches_names_case_sensitively() {
        let mut cart = Cart::new();

        cart.add_item(Item::new("apple", Decimal::ONE));
        let outcome = cart.add_item(Item::new("Apple", Decimal::ONE));

        assert_eq!(outcome, AddOutcome::Inserted(1));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn remove_item_compacts_and_keeps_order() {
        let mut cart = Cart::with_items(test_items());

        let outcome = cart.remove_item("Apple");

        assert_eq!(
            outcome,
            RemoveOutcome::Removed(Item::with_quantity("Apple", Decimal::new(150, 2), 2))
        );
        assert_eq!(names(&cart), ["Bread", "Milk"]);
    }

    #[test]
    fn remove_missing_item_is_a_no_op() {
        let mut cart = Cart::with_items(test_items());
        let before = cart.clone();

        assert_eq!(cart.remove_item("Cheese"), RemoveOutcome::NotFound);
        assert_eq!(cart, before);
    }

    #[test]
    fn remove_from_empty_cart_is_a_no_op() {
        let mut cart = Cart::new();

        assert_eq!(cart.remove_item("Anything"), RemoveOutcome::NotFound);
        assert!(cart.is_empty());
    }

    #[test]
    fn readding_after_removal_appends_at_end() {
        let mut cart = Cart::with_items(test_items());

        cart.remove_item("Apple");
        cart.add_item(Item::new("Apple", Decimal::ONE));

        assert_eq!(names(&cart), ["Bread", "Milk", "Apple"]);
        assert_eq!(cart.get_item("Apple").map(Item::quantity), Some(1));
    }

    #[test]
    fn to_items_is_a_snapshot() {
        let mut cart = Cart::with_items(test_items());
        let mut snapshot = cart.to_items();

        snapshot.clear();
        cart.add_item(Item::new("Eggs", Decimal::new(180, 2)));

        assert!(snapshot.is_empty());
        assert_eq!(cart.len(), 4);
    }

    #[test]
    fn subtotal_sums_line_totals() {
        let cart = Cart::with_items(test_items());

        // 3.00 + 2.20 + 2.85
        assert_eq!(cart.subtotal(), Decimal::new(805, 2));
    }

    #[test]
    fn subtotal_is_not_rounded() {
        let cart = Cart::with_items([Item::with_quantity("Bolt", Decimal::new(1, 3), 5)]);

        assert_eq!(cart.subtotal(), Decimal::new(5, 3));
    }

    #[test]
    fn item_count_sums_quantities() {
        let cart = Cart::with_items(test_items());

        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn extreme_quantities_and_prices_saturate() {
        let mut cart = Cart::new();

        cart.add_item(Item::with_quantity("Bulk", Decimal::ONE, i64::MAX));
        let outcome = cart.add_item(Item::new("Bulk", Decimal::ONE));

        assert_eq!(outcome, AddOutcome::Merged(0));
        assert_eq!(cart.get_item("Bulk").map(Item::quantity), Some(i64::MAX));

        cart.add_item(Item::with_quantity("Gold", Decimal::MAX, 2));
        cart.add_item(Item::new("Pin", Decimal::ONE));

        assert_eq!(cart.subtotal(), Decimal::MAX);
        assert_eq!(cart.item_count(), i64::MAX);
        assert_eq!(
            cart.apply_discount(&FixedDiscount::new(Decimal::MIN)),
            Decimal::MAX
        );
        assert_eq!(
            cart.apply_discount(&PercentageDiscount::new(Decimal::new(-100, 0))),
            Decimal::MAX
        );
    }

    #[test]
    fn apply_discount_passes_subtotal_through() {
        let cart = Cart::with_items(test_items());

        assert_eq!(
            cart.apply_discount(&FixedDiscount::new(Decimal::new(5, 0))),
            Decimal::new(305, 2)
        );
        assert_eq!(
            cart.apply_discount(&PercentageDiscount::new(Decimal::new(50, 0))),
            Decimal::new(403, 2)
        );
    }

    #[test]
    fn apply_discount_accepts_trait_objects() {
        let cart = Cart::with_items(test_items());
        let discounts: [Box<dyn Discount>; 2] = [
            Box::new(FixedDiscount::new(Decimal::ONE)),
            Box::new(PercentageDiscount::new(Decimal::TEN)),
        ];

        let totals: Vec<Decimal> = discounts
            .iter()
            .map(|discount| cart.apply_discount(discount))
            .collect();

        assert_eq!(totals, [Decimal::new(705, 2), Decimal::new(725, 2)]);
    }

    #[test]
    fn apply_discount_to_empty_cart() {
        let cart = Cart::new();

        assert_eq!(
            cart.apply_discount(&FixedDiscount::new(Decimal::TEN)),
            Decimal::ZERO
        );
        assert_eq!(
            cart.apply_discount(&PercentageDiscount::new(Decimal::TEN)),
            Decimal::ZERO
        );
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::with_items(test_items());

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn collects_from_iterator_with_merging() {
        let cart: Cart = [
            Item::with_quantity("Tea", Decimal::new(300, 2), 1),
            Item::with_quantity("Tea", Decimal::new(100, 2), 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.subtotal(), Decimal::new(900, 2));
    }
}
