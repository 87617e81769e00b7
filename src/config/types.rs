use serde::Deserialize;

/// Main configuration structure for Bookstock
///
/// Every section has built-in defaults matching the fixed target catalog, so
/// the binary runs without any configuration file at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub throttle: ThrottleConfig,
}

/// Target catalog layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// URL of the first catalog listing page
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// CSS selector matching item detail-page anchors on a listing page
    #[serde(rename = "item-selector")]
    pub item_selector: String,

    /// CSS selector matching the next-page pagination anchor
    #[serde(rename = "next-selector")]
    pub next_selector: String,

    /// CSS selector matching the price display node on a detail page
    #[serde(rename = "price-selector")]
    pub price_selector: String,

    /// CSS selector matching the availability node on a detail page
    #[serde(rename = "stock-selector")]
    pub stock_selector: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            start_url: "https://books.toscrape.com/index.html".to_string(),
            item_selector: "h3 > a".to_string(),
            next_selector: "li.next > a".to_string(),
            price_selector: "p.price_color".to_string(),
            stock_selector: "p.instock.availability".to_string(),
        }
    }
}

/// HTTP client and fetch policy configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Overall request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Maximum fetch attempts per URL, including the first
    #[serde(rename = "max-attempts")]
    pub max_attempts: u32,

    /// Initial delay before a retry (milliseconds), doubled per attempt
    #[serde(rename = "retry-backoff-ms")]
    pub retry_backoff_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36"
                .to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            max_attempts: 3,
            retry_backoff_ms: 500,
        }
    }
}

/// Inter-request politeness delay configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ThrottleConfig {
    /// Minimum delay between item requests (milliseconds)
    #[serde(rename = "min-delay-ms")]
    pub min_delay_ms: u64,

    /// Maximum delay between item requests (milliseconds)
    #[serde(rename = "max-delay-ms")]
    pub max_delay_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_delay_ms: 800,
            max_delay_ms: 1000,
        }
    }
}
