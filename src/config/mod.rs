//! Configuration module for Bookstock
//!
//! Loads the optional TOML configuration file, applies built-in defaults
//! for the fixed target catalog, and validates the result.

mod parser;
mod types;
mod validation;

pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use types::{CatalogConfig, Config, HttpConfig, ThrottleConfig};
pub use validation::validate;
