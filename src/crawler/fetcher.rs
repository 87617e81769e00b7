//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building the HTTP client with the fixed browser User-Agent
//! - GET requests to fetch page content
//! - A single bounded retry policy shared by every fetch call-site
//! - Error classification
//!
//! Both the listing crawl and the per-item fetches go through
//! [`fetch_page`], so transport failures are handled the same way
//! everywhere.

use crate::config::HttpConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Terminal failure of a fetch, after retries are spent
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-retryable HTTP status (4xx other than 429)
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body could not be read
    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All attempts failed with retryable errors
    #[error("giving up on {url} after {attempts} attempts")]
    Exhausted { url: String, attempts: u32 },
}

/// Builds the shared HTTP client
///
/// The client carries the configured User-Agent on every request and pools
/// connections across repeated calls to the same host.
///
/// # Arguments
///
/// * `config` - The HTTP configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page body with bounded retry
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | 2xx | Return body |
/// | 4xx (except 429) | Immediate failure |
/// | 429 / 5xx | Retry with backoff |
/// | Timeout / network error | Retry with backoff |
///
/// Up to `max-attempts` tries in total; the backoff starts at
/// `retry-backoff-ms` and doubles per attempt.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `config` - The HTTP configuration (attempt and backoff policy)
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Terminal failure after the policy was applied
pub async fn fetch_page(
    client: &Client,
    config: &HttpConfig,
    url: &url::Url,
) -> Result<String, FetchError> {
    let mut backoff = Duration::from_millis(config.retry_backoff_ms);

    for attempt in 1..=config.max_attempts {
        match client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();

                if status.is_success() {
                    return response.text().await.map_err(|e| FetchError::Body {
                        url: url.to_string(),
                        source: e,
                    });
                }

                if !is_retryable_status(status) {
                    return Err(FetchError::Status {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }

                tracing::warn!(
                    "HTTP {} from {}, attempt {}/{}",
                    status,
                    url,
                    attempt,
                    config.max_attempts
                );
            }
            Err(e) => {
                tracing::warn!(
                    "request to {} failed on attempt {}/{}: {}",
                    url,
                    attempt,
                    config.max_attempts,
                    e
                );
            }
        }

        if attempt < config.max_attempts {
            tokio::time::sleep(backoff).await;
            backoff *= 2;
        }
    }

    Err(FetchError::Exhausted {
        url: url.to_string(),
        attempts: config.max_attempts,
    })
}

/// Whether a non-success status is worth another attempt
fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}
