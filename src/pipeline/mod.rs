//! Extraction pipeline for job postings
//!
//! This module contains the core pipeline stages:
//! - Listing page fetch (fatal on failure)
//! - Listing HTML parsing into listed-stage records
//! - Per-item detail enrichment (fault isolated)
//! - Orchestration with randomized inter-request throttling

mod enricher;
mod fetcher;
mod listing;
mod orchestrator;

pub use enricher::enrich_posting;
pub use fetcher::{build_http_client, fetch_listing_page, TRACKING_MARKER};
pub use listing::{detail_api_url, parse_listing};
pub use orchestrator::Harvester;

use crate::config::Config;
use crate::locale::Locales;
use crate::model::JobPosting;
use crate::Result;

/// Runs a complete harvest
///
/// Convenience entry point that builds a [`Harvester`] and executes one run.
///
/// # Arguments
///
/// * `config` - Pipeline configuration
/// * `locales` - The loaded locale dictionaries
/// * `keyword` - Search term
/// * `location` - Search location
/// * `language` - Language code; `None` uses the baseline locale
///
/// # Returns
///
/// * `Ok(Vec<JobPosting>)` - All postings in listing order, enriched where
///   their detail fetch succeeded
/// * `Err(HarvestError)` - Listing fetch failed
pub async fn harvest(
    config: Config,
    locales: Locales,
    keyword: &str,
    location: &str,
    language: Option<&str>,
) -> Result<Vec<JobPosting>> {
    let harvester = Harvester::new(config, locales)?;
    harvester.run(keyword, location, language).await
}
