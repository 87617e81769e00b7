//! Crawler coordinator - main valuation orchestration logic
//!
//! Runs the listing crawl to completion, then visits each item detail
//! page sequentially with a politeness delay between requests, summing
//! the per-item valuations into the final total.

use crate::config::Config;
use crate::crawler::catalog::crawl_catalog;
use crate::crawler::fetcher::build_http_client;
use crate::crawler::item::valuate_item;
use crate::crawler::throttle::Throttle;
use crate::crawler::Selectors;
use crate::Result;
use reqwest::Client;
use url::Url;

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    client: Client,
    selectors: Selectors,
    throttle: Throttle,
    start_url: Url,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// Parses the configured selectors and start URL and builds the shared
    /// HTTP client used for every request in the run.
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(BookstockError)` - Invalid selectors/URL or client build failure
    pub fn new(config: Config) -> Result<Self> {
        let selectors = Selectors::from_config(&config.catalog)?;
        let start_url = Url::parse(&config.catalog.start_url)?;
        let client = build_http_client(&config.http)?;
        let throttle = Throttle::new(&config.throttle);

        Ok(Self {
            config,
            client,
            selectors,
            throttle,
            start_url,
        })
    }

    /// Runs the full crawl and returns the total inventory valuation
    ///
    /// 1. Crawl the catalog for the complete item URL sequence
    /// 2. Valuate each item in order, pausing between requests
    /// 3. Sum the valuations
    ///
    /// Per-item failures contribute 0.0 and never abort the run, so the
    /// result is a best-effort sum over whatever was extracted.
    pub async fn run(&self) -> Result<f64> {
        let started = std::time::Instant::now();

        let item_urls = crawl_catalog(
            &self.client,
            &self.config.http,
            &self.selectors,
            self.start_url.clone(),
        )
        .await;

        tracing::info!("valuating {} items", item_urls.len());

        let mut total = 0.0;
        for (index, url) in item_urls.iter().enumerate() {
            total += valuate_item(&self.client, &self.config.http, &self.selectors, url).await;

            let visited = index + 1;
            if visited % 10 == 0 {
                let rate = visited as f64 / started.elapsed().as_secs_f64();
                tracing::info!(
                    "progress: {}/{} items, {:.2} items/sec, running total {:.2}",
                    visited,
                    item_urls.len(),
                    rate,
                    total
                );
            }

            self.throttle.pause().await;
        }

        tracing::info!(
            "valuation complete: {} items, total {:.2} in {:?}",
            item_urls.len(),
            total,
            started.elapsed()
        );

        Ok(total)
    }
}

/// Runs the full valuation for a configuration
///
/// This is the main entry point: it builds a [`Coordinator`] and runs it,
/// returning the summed inventory valuation.
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(f64)` - The total inventory valuation
/// * `Err(BookstockError)` - Startup failure (the crawl itself fails soft)
pub async fn run_valuation(config: Config) -> Result<f64> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinator_creation_with_defaults() {
        let config = Config::default();
        assert!(Coordinator::new(config).is_ok());
    }

    #[test]
    fn test_coordinator_rejects_bad_start_url() {
        let mut config = Config::default();
        config.catalog.start_url = "::not-a-url::".to_string();
        assert!(Coordinator::new(config).is_err());
    }

    // Full crawl behavior is covered by the wiremock integration tests.
}
