//! HTTP client construction and listing page fetch
//!
//! A listing fetch failure is fatal to the whole run: there is no partial
//! listing, so network errors and non-success statuses propagate to the
//! orchestrator instead of being swallowed.

use crate::config::HttpConfig;
use crate::{HarvestError, Result};
use reqwest::Client;
use std::time::Duration;

/// Tracking marker the target site requires on search requests
pub const TRACKING_MARKER: &str = "public_jobs_jobs-search-bar_search-submit";

/// Builds an HTTP client with timeouts and user agent from configuration
///
/// # Example
///
/// ```no_run
/// use jobharvest::config::HttpConfig;
/// use jobharvest::pipeline::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches the search results page for a keyword and location
///
/// Issues one GET against `{base_url}/jobs/search` with the keyword,
/// location, and the fixed tracking marker as query parameters.
///
/// # Returns
///
/// * `Ok(String)` - Raw listing markup
/// * `Err(HarvestError)` - Network failure or non-success HTTP status
pub async fn fetch_listing_page(
    client: &Client,
    base_url: &str,
    keyword: &str,
    location: &str,
) -> Result<String> {
    let url = format!("{}/jobs/search", base_url);

    let response = client
        .get(&url)
        .query(&[
            ("keywords", keyword),
            ("location", location),
            ("trk", TRACKING_MARKER),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(HarvestError::ListingStatus {
            url,
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}
