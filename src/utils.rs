//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogFormat;

/// Arguments for the checkout binary
#[derive(Debug, Parser)]
#[command(name = "checkout", about = "Price a cart fixture and print its receipt", long_about = None)]
pub struct CheckoutArgs {
    /// Cart fixture to load from `<fixtures-dir>/carts/`
    #[arg(short, long, default_value = "groceries")]
    pub fixture: String,

    /// Directory holding the fixture sets
    #[arg(long, default_value = "./fixtures")]
    pub fixtures_dir: PathBuf,

    /// Discount to apply instead of the fixture's own, e.g. "10%" or "15.00 GBP"
    #[arg(short, long)]
    pub discount: Option<String>,

    /// Log level used when `RUST_LOG` is unset
    #[arg(long, env = "CHECKOUT_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "CHECKOUT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
