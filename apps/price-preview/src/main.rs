//! # Price Preview
//!
//! Prints a quote the way the portal would display it.
//!
//! ```text
//! $ PORTAL_CURRENCY_SYMBOL='$' price-preview quote.json
//! Burger x2: $100.00 -> $80.00 [Cheese, Sauce]
//! Total: $80.00
//! ```
//!
//! Set `RUST_LOG=debug` to see rejected amounts and discount decisions.

mod config;
mod error;
mod quote;

use portal_pricing::PricingFormatter;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, read_file, Args};
use crate::quote::{render_quote, Quote};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays the rendered quote
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse(std::env::args().skip(1))?;

    let formatter = PricingFormatter::new(load_config(args.settings_path.as_deref())?);

    let payload = read_file(&args.quote_path)?;
    let quote: Quote = serde_json::from_str(&payload).map_err(error::PreviewError::from)?;
    info!(path = %args.quote_path, items = quote.items.len(), "Quote loaded");

    for line in render_quote(&quote, &formatter) {
        println!("{line}");
    }

    Ok(())
}
