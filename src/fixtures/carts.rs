//! Cart Fixtures

use serde::Deserialize;

/// A cart in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Build items through the validating constructor
    #[serde(default)]
    pub validate: bool,

    /// Items, added to the cart in order
    pub items: Vec<ItemFixture>,

    /// Discount applied to the subtotal
    #[serde(default)]
    pub discount: Option<DiscountFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item name
    pub name: String,

    /// Unit price (e.g., "1.50 GBP")
    pub price: String,

    /// Quantity, defaulting to one
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

/// Discount configuration from YAML fixtures
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountFixture {
    /// Fixed amount off (e.g., "15.00 GBP")
    Fixed {
        /// Amount string
        value: String,
    },

    /// Percentage off (e.g., "10%" or "0.1")
    Percentage {
        /// Percent points with a `%` suffix (`"10%"`), or a bare fraction of at most 1 (`"0.1"`)
        value: String,
    },
}

impl DiscountFixture {
    /// Interpret a short discount string: a trailing `%` makes a percentage, anything else a fixed
    /// amount.
    pub fn from_shorthand(shorthand: &str) -> Self {
        let value = shorthand.trim().to_string();

        if value.ends_with('%') {
            Self::Percentage { value }
        } else {
            Self::Fixed { value }
        }
    }
}

fn default_quantity() -> i64 {
    1
}
