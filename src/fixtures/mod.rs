//! Fixtures
//!
//! Carts described in YAML, loaded from `<base>/carts/<name>.yml`.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::info;

use crate::{
    cart::Cart,
    discounts::{Discount, FixedDiscount, PercentageDiscount},
    fixtures::carts::{CartFixture, DiscountFixture},
    items::{Item, ItemError},
};

pub mod carts;
pub mod parsing;

pub use parsing::{parse_percentage, parse_price};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No prices loaded yet
    #[error("No prices loaded yet; currency unknown")]
    NoCurrency,

    /// An item failed validation
    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ItemError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Cart built from every loaded item
    cart: Cart,

    /// Discount from the most recently loaded cart that named one
    discount: Option<Box<dyn Discount>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            cart: Cart::new(),
            discount: None,
            currency: None,
        }
    }

    /// Load a cart from a YAML fixture file.
    ///
    /// Items are added in file order through [`Cart::add_item`], so repeated names merge.
    /// Loading several files accumulates into the same cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, if a price or percentage is
    /// malformed, if currencies disagree, or if `validate` is set and an item is rejected.
    #[tracing::instrument(skip(self))]
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        for item_fixture in fixture.items {
            let (price, currency) = parse_price(&item_fixture.price)?;

            self.ensure_currency(currency)?;

            let item = if fixture.validate {
                Item::try_new(item_fixture.name, price, item_fixture.quantity)?
            } else {
                Item::with_quantity(item_fixture.name, price, item_fixture.quantity)
            };

            self.cart.add_item(item);
        }

        if let Some(discount) = fixture.discount {
            self.discount = Some(self.build_discount(discount)?);
        }

        info!(
            items = self.cart.len(),
            has_discount = self.discount.is_some(),
            "loaded cart fixture"
        );

        Ok(self)
    }

    /// Load a cart fixture by name from the default base path.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_cart(name)?;

        Ok(fixture)
    }

    /// Replace the fixture's discount with one parsed from a short string such as `"10%"`.
    ///
    /// Values ending in `%` such as `"10%"` are percentages; anything else is read as a fixed
    /// amount such as `"15.00 GBP"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is malformed or its currency differs from the cart's.
    pub fn override_discount(&mut self, shorthand: &str) -> Result<&mut Self, FixtureError> {
        let discount = self.build_discount(DiscountFixture::from_shorthand(shorthand))?;

        self.discount = Some(discount);

        Ok(self)
    }

    /// Get the cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Take the cart out of the fixture
    pub fn into_cart(self) -> Cart {
        self.cart
    }

    /// Get the discount, if one was configured
    pub fn discount(&self) -> Option<&dyn Discount> {
        self.discount.as_deref()
    }

    /// Get the currency of the fixture set
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NoCurrency`] if no prices have been loaded.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    fn build_discount(
        &mut self,
        fixture: DiscountFixture,
    ) -> Result<Box<dyn Discount>, FixtureError> {
        match fixture {
            DiscountFixture::Fixed { value } => {
                let (amount, currency) = parse_price(&value)?;

                self.ensure_currency(currency)?;

                Ok(Box::new(FixedDiscount::new(amount)))
            }
            DiscountFixture::Percentage { value } => Ok(Box::new(
                PercentageDiscount::from_fraction(parse_percentage(&value)?),
            )),
        }
    }

    fn ensure_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        if let Some(existing_currency) = self.currency {
            if existing_currency != currency {
                return Err(FixtureError::CurrencyMismatch(
                    existing_currency.iso_alpha_code.to_string(),
                    currency.iso_alpha_code.to_string(),
                ));
            }
        } else {
            self.currency = Some(currency);
        }

        Ok(())
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
