//! Preview configuration.
//!
//! The monetary snapshot comes from a backend settings file when one is
//! given, otherwise from `PORTAL_*` environment variables with defaults.

use std::fs;

use portal_pricing::MonetaryConfig;
use tracing::info;

use crate::error::PreviewError;

/// Command line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub quote_path: String,
    pub settings_path: Option<String>,
}

impl Args {
    /// Parses `<quote.json> [--config <settings.json>]` (program name excluded).
    pub fn parse<I>(args: I) -> Result<Self, PreviewError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut quote_path = None;
        let mut settings_path = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    settings_path = Some(args.next().ok_or(PreviewError::Usage)?);
                }
                _ if quote_path.is_none() && !arg.starts_with("--") => quote_path = Some(arg),
                _ => return Err(PreviewError::Usage),
            }
        }

        Ok(Args {
            quote_path: quote_path.ok_or(PreviewError::Usage)?,
            settings_path,
        })
    }
}

/// Loads the monetary snapshot for this run.
pub fn load_config(settings_path: Option<&str>) -> Result<MonetaryConfig, PreviewError> {
    let config = match settings_path {
        Some(path) => {
            let payload = read_file(path)?;
            MonetaryConfig::from_json(&payload)?
        }
        None => MonetaryConfig::from_lookup(|key| std::env::var(key).ok())?,
    };

    info!(
        decimal_digits = config.decimal_digits,
        currency_symbol = %config.currency_symbol,
        symbol_position = ?config.symbol_position,
        "Configuration loaded"
    );

    Ok(config)
}

pub fn read_file(path: &str) -> Result<String, PreviewError> {
    fs::read_to_string(path).map_err(|source| PreviewError::Read {
        path: path.to_string(),
        source,
    })
}
