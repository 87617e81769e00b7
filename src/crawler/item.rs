//! Item valuator: detail-page field extraction
//!
//! Fetches one item detail page and extracts the price and stock count
//! from their display nodes. Every extraction failure resolves to a safe
//! default (0.0 price, 0 stock) so a single bad item can never abort the
//! run; the valuation of an item is price × stock.

use crate::config::HttpConfig;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::Selectors;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// First contiguous run of digits and decimal points, e.g. "51.77" in "£51.77"
static PRICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9.]+").expect("price pattern"));

/// First contiguous run of digits, e.g. "22" in "In stock (22 available)"
static STOCK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("stock pattern"));

/// Extracts the price from a parsed detail page
///
/// Returns 0.0 when the price node is absent, contains no numeric run, or
/// the run does not parse as a float.
pub fn extract_price(document: &Html, selector: &Selector) -> f64 {
    let Some(node) = document.select(selector).next() else {
        tracing::error!("price not found");
        return 0.0;
    };

    let text: String = node.text().collect();
    let Some(matched) = PRICE_RE.find(&text) else {
        tracing::error!("no price amount in '{}'", text.trim());
        return 0.0;
    };

    match matched.as_str().parse::<f64>() {
        Ok(price) => price,
        Err(e) => {
            tracing::error!("unparseable price '{}': {}", matched.as_str(), e);
            0.0
        }
    }
}

/// Extracts the stock quantity from a parsed detail page
///
/// Returns 0 when the availability node is absent or its text carries no
/// digit run.
pub fn extract_stock(document: &Html, selector: &Selector) -> u32 {
    let Some(node) = document.select(selector).next() else {
        tracing::error!("stock not found");
        return 0;
    };

    let text: String = node.text().collect();
    let Some(matched) = STOCK_RE.find(&text) else {
        tracing::error!("no stock quantity in '{}'", text.trim());
        return 0;
    };

    match matched.as_str().parse::<u32>() {
        Ok(stock) => stock,
        Err(e) => {
            tracing::error!("unparseable stock quantity '{}': {}", matched.as_str(), e);
            0
        }
    }
}

/// Fetches one item detail page and returns its valuation (price × stock)
///
/// A terminal fetch failure is logged and contributes 0.0; extraction
/// failures degrade to the field defaults.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `http` - The HTTP fetch policy
/// * `selectors` - The pre-parsed detail-page selectors
/// * `url` - The item detail-page URL
pub async fn valuate_item(
    client: &Client,
    http: &HttpConfig,
    selectors: &Selectors,
    url: &Url,
) -> f64 {
    let body = match fetch_page(client, http, url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("item fetch failed for {}: {}", url, e);
            return 0.0;
        }
    };

    let document = Html::parse_document(&body);
    let price = extract_price(&document, &selectors.price);
    let stock = extract_stock(&document, &selectors.stock);
    let valuation = price * f64::from(stock);

    tracing::info!(
        "valuated {}: price {}, stock {}, value {}",
        url,
        price,
        stock,
        valuation
    );

    valuation
}
