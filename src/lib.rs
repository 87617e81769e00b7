//! Bookstock: a catalog inventory valuator
//!
//! This crate implements a sequential crawler that walks a paginated product
//! catalog, collects item detail-page URLs, then visits each detail page to
//! extract a price and a stock count, summing price × stock into a single
//! inventory valuation.

pub mod config;
pub mod crawler;

use thiserror::Error;

/// Main error type for Bookstock operations
#[derive(Debug, Error)]
pub enum BookstockError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Bookstock operations
pub type Result<T> = std::result::Result<T, BookstockError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_valuation, Coordinator};
