//! Crawler module for catalog walking and item valuation
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with a uniform bounded retry policy
//! - Catalog pagination and item-link extraction
//! - Detail-page price/stock extraction
//! - Politeness throttling and overall coordination

mod catalog;
mod coordinator;
mod fetcher;
mod item;
mod throttle;

pub use catalog::{crawl_catalog, parse_listing, ListingPage};
pub use coordinator::{run_valuation, Coordinator};
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use item::{extract_price, extract_stock, valuate_item};
pub use throttle::Throttle;

use crate::config::CatalogConfig;
use crate::{ConfigError, ConfigResult};
use scraper::Selector;

/// Pre-parsed CSS selectors for the target catalog layout
#[derive(Debug, Clone)]
pub struct Selectors {
    /// Item detail-page anchors on a listing page
    pub item_link: Selector,

    /// Next-page pagination anchor
    pub next_page: Selector,

    /// Price display node on a detail page
    pub price: Selector,

    /// Availability node on a detail page
    pub stock: Selector,
}

impl Selectors {
    /// Parses the configured selector strings
    pub fn from_config(config: &CatalogConfig) -> ConfigResult<Self> {
        Ok(Self {
            item_link: parse_selector(&config.item_selector)?,
            next_page: parse_selector(&config.next_selector)?,
            price: parse_selector(&config.price_selector)?,
            stock: parse_selector(&config.stock_selector)?,
        })
    }
}

fn parse_selector(raw: &str) -> ConfigResult<Selector> {
    Selector::parse(raw)
        .map_err(|e| ConfigError::InvalidSelector(format!("'{}': {}", raw, e)))
}
