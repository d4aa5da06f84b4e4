//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, MoneyError, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    discounts::{Discount, round_currency},
};

/// Errors that can occur while building or printing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Wrapper for money errors.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// An amount too large to express in minor units.
    #[error("Amount {0} cannot be represented in minor units")]
    Amount(Decimal),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One cart line as printed.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Item name
    pub name: String,

    /// Units bought
    pub quantity: i64,

    /// Price of one unit, rounded to minor units on its own.
    ///
    /// Sub-cent prices mean `unit_price * quantity` can differ from `line_total`: 0.125 x 3
    /// prints 0.13 and 0.38.
    pub unit_price: Money<'a, Currency>,

    /// Unrounded `price * quantity`, then rounded to minor units
    pub line_total: Money<'a, Currency>,
}

/// Final receipt for a priced cart.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    /// Lines in cart order
    lines: Vec<ReceiptLine<'a>>,

    /// Total cost before any discount
    subtotal: Money<'a, Currency>,

    /// Total amount payable after the discount
    total: Money<'a, Currency>,

    /// Currency used for all monetary values
    currency: &'a Currency,
}

impl<'a> Receipt<'a> {
    /// Price a cart, applying the discount if there is one.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Amount`] if an amount does not fit in minor units.
    pub fn from_cart(
        cart: &Cart,
        discount: Option<&dyn Discount>,
        currency: &'a Currency,
    ) -> Result<Self, ReceiptError> {
        let lines = cart
            .iter()
            .map(|item| {
                Ok(ReceiptLine {
                    name: item.name().to_string(),
                    quantity: item.quantity(),
                    unit_price: to_money(item.price(), currency)?,
                    line_total: to_money(item.line_total(), currency)?,
                })
            })
            .collect::<Result<Vec<_>, ReceiptError>>()?;

        let subtotal = cart.subtotal();
        let total = discount.map_or(subtotal, |discount| cart.apply_discount(discount));

        Ok(Self {
            lines,
            subtotal: to_money(subtotal, currency)?,
            total: to_money(total, currency)?,
            currency,
        })
    }

    /// Lines in cart order
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Total cost before any discount
    pub fn subtotal(&self) -> Money<'a, Currency> {
        self.subtotal
    }

    /// Total amount payable
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Currency used for all monetary values
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Calculate the savings made by the discount.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money<'a, Currency>, MoneyError> {
        self.subtotal.sub(self.total)
    }

    /// Calculates the savings as a fraction of the subtotal
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings_percent(&self) -> Result<Percentage, MoneyError> {
        let savings = self.savings()?;
        let subtotal = self.subtotal();

        let savings_minor = savings.to_minor_units();
        let subtotal_minor = subtotal.to_minor_units();

        if subtotal_minor == 0 {
            return Ok(Percentage::from(Decimal::ZERO));
        }

        Ok(Percentage::from(
            Decimal::from(savings_minor) / Decimal::from(subtotal_minor),
        ))
    }

    /// Prints the receipt.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Qty", "Unit Price", "Line Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.quantity.to_string(),
                line.unit_price.to_string(),
                line.line_total.to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        write_receipt_summary(&mut out, self)
    }
}

fn write_receipt_summary(
    out: &mut impl io::Write,
    receipt: &Receipt<'_>,
) -> Result<(), ReceiptError> {
    let savings = receipt.savings()?;
    let savings_percent = receipt.savings_percent()?;
    let savings_percent_points = percent_points_from_fractional_percentage(savings_percent);

    let rows = [
        ("Subtotal:", receipt.subtotal().to_string()),
        ("Savings:", format!("({savings_percent_points:.2}%) {savings}")),
        ("Total:", receipt.total().to_string()),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    for (label, value) in rows {
        writeln!(out, " {label:<label_width$} {value:>value_width$}")
            .map_err(|_err| ReceiptError::IO)?;
    }

    writeln!(out).map_err(|_err| ReceiptError::IO)
}

/// Convert a decimal amount to money, rounding to whole minor units.
fn to_money(amount: Decimal, currency: &Currency) -> Result<Money<'_, Currency>, ReceiptError> {
    let minor = round_currency(amount)
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.to_i64())
        .ok_or(ReceiptError::Amount(amount))?;

    Ok(Money::from_minor(minor, currency))
}

fn percent_points_from_fractional_percentage(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print percent points.
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
}
