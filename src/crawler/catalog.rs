//! Listing crawler: catalog pagination and item-link extraction
//!
//! Walks the catalog from the configured start page, following the
//! next-page control until none remains, and collects every item
//! detail-page URL in page order and document order.

use crate::config::HttpConfig;
use crate::crawler::fetcher::fetch_page;
use crate::crawler::Selectors;
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Extracted navigation information from one catalog listing page
#[derive(Debug, Clone)]
pub struct ListingPage {
    /// Item detail-page URLs in document order (duplicates preserved)
    pub item_urls: Vec<Url>,

    /// The next catalog page, if the page has a usable next-page link
    pub next_page: Option<Url>,
}

/// Parses one catalog listing page
///
/// Item anchors without an `href` are skipped. A next-page node without an
/// `href` is treated the same as no next-page node at all, so pagination
/// terminates there.
///
/// # Arguments
///
/// * `body` - The HTML content of the listing page
/// * `base_url` - The URL the page was fetched from, for resolving relative hrefs
/// * `selectors` - The pre-parsed catalog selectors
pub fn parse_listing(body: &str, base_url: &Url, selectors: &Selectors) -> ListingPage {
    let document = Html::parse_document(body);

    let mut item_urls = Vec::new();
    for element in document.select(&selectors.item_link) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        match base_url.join(href) {
            Ok(absolute) => item_urls.push(absolute),
            Err(e) => {
                tracing::warn!("skipping malformed item href '{}' on {}: {}", href, base_url, e);
            }
        }
    }

    let next_page = document
        .select(&selectors.next_page)
        .next()
        .and_then(|element| element.value().attr("href"))
        .and_then(|href| match base_url.join(href) {
            Ok(absolute) => Some(absolute),
            Err(e) => {
                tracing::warn!("malformed next-page href '{}' on {}: {}", href, base_url, e);
                None
            }
        });

    ListingPage {
        item_urls,
        next_page,
    }
}

/// Crawls the catalog, returning all item detail-page URLs
///
/// Fetches listing pages sequentially, following the next-page link until
/// the last page. A page with no item links contributes nothing but does
/// not stop pagination. A terminal fetch failure ends the crawl for this
/// branch; whatever was collected so far is returned.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `http` - The HTTP fetch policy
/// * `selectors` - The pre-parsed catalog selectors
/// * `start_url` - The first catalog page
pub async fn crawl_catalog(
    client: &Client,
    http: &HttpConfig,
    selectors: &Selectors,
    start_url: Url,
) -> Vec<Url> {
    let mut item_urls = Vec::new();
    let mut current = start_url;
    let mut pages = 0usize;

    loop {
        tracing::debug!("scraping catalog page {}", current);

        let body = match fetch_page(client, http, &current).await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("catalog fetch failed at {}: {}", current, e);
                break;
            }
        };

        let listing = parse_listing(&body, &current, selectors);
        if listing.item_urls.is_empty() {
            tracing::warn!("no item links found on {}", current);
        }
        item_urls.extend(listing.item_urls);
        pages += 1;

        match listing.next_page {
            Some(next) => current = next,
            None => {
                tracing::info!("no next page after {}", current);
                break;
            }
        }
    }

    tracing::info!(
        "catalog crawl finished: {} item urls across {} pages",
        item_urls.len(),
        pages
    );

    item_urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CatalogConfig;

    fn selectors() -> Selectors {
        Selectors::from_config(&CatalogConfig::default()).unwrap()
    }

    fn base_url() -> Url {
        Url::parse("https://shop.example.com/catalogue/page-1.html").unwrap()
    }

    #[test]
    fn test_extract_item_links_in_document_order() {
        let html = r#"
            <html><body>
                <article><h3><a href="first.html">First</a></h3></article>
                <article><h3><a href="second.html">Second</a></h3></article>
                <article><h3><a href="third.html">Third</a></h3></article>
            </body></html>
        "#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert_eq!(listing.item_urls.len(), 3);
        assert_eq!(
            listing.item_urls[0].as_str(),
            "https://shop.example.com/catalogue/first.html"
        );
        assert_eq!(
            listing.item_urls[2].as_str(),
            "https://shop.example.com/catalogue/third.html"
        );
    }

    #[test]
    fn test_relative_hrefs_resolve_against_page_url() {
        let html = r#"<html><body><h3><a href="../items/one.html">One</a></h3></body></html>"#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert_eq!(
            listing.item_urls[0].as_str(),
            "https://shop.example.com/items/one.html"
        );
    }

    #[test]
    fn test_absolute_hrefs_pass_through() {
        let html =
            r#"<html><body><h3><a href="https://other.example.com/x.html">X</a></h3></body></html>"#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert_eq!(
            listing.item_urls[0].as_str(),
            "https://other.example.com/x.html"
        );
    }

    #[test]
    fn test_duplicate_links_are_preserved() {
        let html = r#"
            <html><body>
                <h3><a href="same.html">Same</a></h3>
                <h3><a href="same.html">Same again</a></h3>
            </body></html>
        "#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert_eq!(listing.item_urls.len(), 2);
        assert_eq!(listing.item_urls[0], listing.item_urls[1]);
    }

    #[test]
    fn test_item_anchor_without_href_is_skipped() {
        let html = r#"<html><body><h3><a>No href</a></h3></body></html>"#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert!(listing.item_urls.is_empty());
    }

    #[test]
    fn test_page_with_no_items_still_reports_next() {
        let html = r#"
            <html><body>
                <ul class="pager"><li class="next"><a href="page-2.html">next</a></li></ul>
            </body></html>
        "#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert!(listing.item_urls.is_empty());
        assert_eq!(
            listing.next_page.unwrap().as_str(),
            "https://shop.example.com/catalogue/page-2.html"
        );
    }

    #[test]
    fn test_next_page_resolved_relative() {
        let html = r#"
            <html><body>
                <h3><a href="item.html">Item</a></h3>
                <li class="next"><a href="page-2.html">next</a></li>
            </body></html>
        "#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert_eq!(
            listing.next_page.unwrap().as_str(),
            "https://shop.example.com/catalogue/page-2.html"
        );
    }

    #[test]
    fn test_no_next_page_node() {
        let html = r#"<html><body><h3><a href="item.html">Item</a></h3></body></html>"#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert!(listing.next_page.is_none());
    }

    #[test]
    fn test_next_page_anchor_without_href_terminates() {
        let html = r#"
            <html><body>
                <li class="next"><a>next</a></li>
            </body></html>
        "#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert!(listing.next_page.is_none());
    }

    #[test]
    fn test_only_first_next_anchor_is_used() {
        let html = r#"
            <html><body>
                <li class="next"><a href="page-2.html">next</a></li>
                <li class="next"><a href="page-9.html">bogus</a></li>
            </body></html>
        "#;
        let listing = parse_listing(html, &base_url(), &selectors());
        assert_eq!(
            listing.next_page.unwrap().as_str(),
            "https://shop.example.com/catalogue/page-2.html"
        );
    }
}
