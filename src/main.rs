//! Checkout CLI
//!
//! Loads a cart fixture, applies its discount (or the one given with `-d`) and prints a receipt.
//!
//! Run with: `cargo run -- -f groceries -d 10%`

use std::io;

use anyhow::Result;
use clap::Parser;

use checkout::{
    fixtures::Fixture, logging::init_subscriber, receipt::Receipt, utils::CheckoutArgs,
};

/// Checkout CLI
pub fn main() -> Result<()> {
    let args = CheckoutArgs::parse();

    init_subscriber(&args.log_level, args.log_format)?;

    let mut fixture = Fixture::with_base_path(&args.fixtures_dir);

    fixture.load_cart(&args.fixture)?;

    if let Some(shorthand) = args.discount.as_deref() {
        fixture.override_discount(shorthand)?;
    }

    let receipt = Receipt::from_cart(fixture.cart(), fixture.discount(), fixture.currency()?)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    receipt.write_to(&mut handle)?;

    Ok(())
}
