//! Pipeline orchestration
//!
//! Sequences listing fetch -> listing parse -> per-item enrichment. The
//! first two stages are fatal to the whole run; each enrichment step is
//! independently fault-isolated. Enrichment is deliberately sequential so
//! the randomized delay acts as an inter-request gap against the scraped
//! site; introducing concurrency here would change the request-rate
//! contract and would need an equivalent throttle in its place.

use crate::config::Config;
use crate::locale::Locales;
use crate::model::JobPosting;
use crate::pipeline::enricher::enrich_posting;
use crate::pipeline::fetcher::{build_http_client, fetch_listing_page};
use crate::pipeline::listing::parse_listing;
use crate::Result;
use rand::Rng;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Holds the HTTP client, locales, and configuration for harvest runs
///
/// Each `run` invocation is independent: no shared mutable state survives
/// between runs beyond the reused connection pool.
pub struct Harvester {
    client: Client,
    locales: Locales,
    config: Config,
}

impl Harvester {
    /// Creates a harvester from configuration and the loaded locale set
    pub fn new(config: Config, locales: Locales) -> Result<Self> {
        let client = build_http_client(&config.http)?;
        Ok(Self {
            client,
            locales,
            config,
        })
    }

    /// Runs the full pipeline against the locale-derived site domain
    ///
    /// The base URL is built from the localized `linkedin.domain` value, so
    /// the same logic targets country-specific subdomains.
    ///
    /// # Arguments
    ///
    /// * `keyword` - Search term
    /// * `location` - Search location
    /// * `language` - Language code; `None` uses the baseline locale
    pub async fn run(
        &self,
        keyword: &str,
        location: &str,
        language: Option<&str>,
    ) -> Result<Vec<JobPosting>> {
        let translator = self.locales.translator(language);
        let base_url = format!("https://{}.linkedin.com", translator.translate("linkedin.domain"));
        self.run_with_base_url(&base_url, keyword, location, language)
            .await
    }

    /// Runs the full pipeline against an explicit base URL
    ///
    /// Fetches the listing page, parses it into listed-stage records, then
    /// enriches each record sequentially with a randomized delay before
    /// every detail fetch. All postings are returned regardless of how many
    /// enrichments failed; enrichment never reorders the listing.
    pub async fn run_with_base_url(
        &self,
        base_url: &str,
        keyword: &str,
        location: &str,
        language: Option<&str>,
    ) -> Result<Vec<JobPosting>> {
        let translator = self.locales.translator(language);

        info!(
            "Fetching listing for '{}' in '{}' from {}",
            keyword, location, base_url
        );
        let html = fetch_listing_page(&self.client, base_url, keyword, location).await?;

        let postings = parse_listing(&html, keyword, base_url);
        info!("Parsed {} postings from listing page", postings.len());

        let mut results = Vec::with_capacity(postings.len());
        for posting in postings {
            self.throttle().await;
            results.push(enrich_posting(&self.client, posting, &translator).await);
        }

        let enriched = results.iter().filter(|p| p.is_enriched()).count();
        info!(
            "Harvest complete: {} postings, {} enriched",
            results.len(),
            enriched
        );

        Ok(results)
    }

    /// Sleeps a uniformly sampled interval from the configured delay window
    ///
    /// Politeness/anti-blocking measure against the scraped site; the window
    /// bounds are tunable configuration, not to be removed.
    async fn throttle(&self) {
        let delay_ms = {
            let mut rng = rand::thread_rng();
            rng.gen_range(self.config.harvester.delay_min_ms..=self.config.harvester.delay_max_ms)
        };
        debug!("Waiting {}ms before detail fetch", delay_ms);
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}
