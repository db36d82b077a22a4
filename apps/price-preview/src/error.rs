//! Error types for the preview CLI.

use portal_pricing::ConfigError;

/// Preview errors.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Usage: price-preview <quote.json> [--config <settings.json>]")]
    Usage,

    #[error("Could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed quote: {0}")]
    Quote(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
