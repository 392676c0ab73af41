//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to stand in for the scraped site and exercise
//! the full fetch -> parse -> enrich cycle end-to-end.

use jobharvest::config::{Config, HarvesterConfig};
use jobharvest::locale::Locales;
use jobharvest::{HarvestError, Harvester};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with a near-zero throttle window
fn create_test_config() -> Config {
    Config {
        harvester: HarvesterConfig {
            delay_min_ms: 1,
            delay_max_ms: 5,
        },
        ..Config::default()
    }
}

fn create_harvester() -> Harvester {
    let locales = Locales::load().expect("locale dictionaries must parse");
    Harvester::new(create_test_config(), locales).expect("failed to create harvester")
}

/// Builds a listing page with one well-formed item per (uid, title) pair
fn listing_html(items: &[(&str, &str)]) -> String {
    let rows: Vec<String> = items
        .iter()
        .map(|(uid, title)| {
            format!(
                r#"<li>
                  <div class="base-card" data-entity-urn="urn:li:jobPosting:{uid}">
                    <a class="base-card__full-link" href="https://example.invalid/jobs/view/{uid}?refId=track">ver</a>
                    <h3 class="base-search-card__title">{title}</h3>
                    <h4 class="base-search-card__subtitle">Acme Corp</h4>
                    <span class="job-search-card__location">Madrid</span>
                    <time class="job-search-card__listdate" datetime="2024-01-15T00:00:00Z">2 days ago</time>
                  </div>
                </li>"#
            )
        })
        .collect();

    format!(
        r#"<html><body><ul class="jobs-search__results-list">{}</ul></body></html>"#,
        rows.join("\n")
    )
}

const DETAIL_HTML: &str = r#"<html><body>
  <div class="salary compensation__salary"> €50,000/yr </div>
  <div class="show-more-less-html__markup"><p>Build <b>things</b></p></div>
  <ul>
    <li class="description__job-criteria-item">
      <h3 class="description__job-criteria-subheader"> Seniority level </h3>
      <span class="description__job-criteria-text"> Mid-Senior level </span>
    </li>
    <li class="description__job-criteria-item">
      <h3 class="description__job-criteria-subheader"> Employment type </h3>
      <span class="description__job-criteria-text"> Full-time </span>
    </li>
  </ul>
</body></html>"#;

#[tokio::test]
async fn test_two_items_one_detail_failure() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Listing page with two well-formed items
    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .and(query_param("keywords", "backend"))
        .and(query_param("location", "Madrid"))
        .and(query_param(
            "trk",
            "public_jobs_jobs-search-bar_search-submit",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&[
            ("111", "Backend Engineer"),
            ("222", "Platform Engineer"),
        ])))
        .mount(&mock_server)
        .await;

    // Item 1's detail page succeeds
    Mock::given(method("GET"))
        .and(path("/jobs-guest/jobs/api/jobPosting/111"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_HTML))
        .mount(&mock_server)
        .await;

    // Item 2's detail page fails
    Mock::given(method("GET"))
        .and(path("/jobs-guest/jobs/api/jobPosting/222"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let harvester = create_harvester();
    let postings = harvester
        .run_with_base_url(&base_url, "backend", "Madrid", Some("en"))
        .await
        .expect("run should succeed despite the failed detail fetch");

    // Both postings come back, in listing order
    assert_eq!(postings.len(), 2);
    assert_eq!(postings[0].uid, "111");
    assert_eq!(postings[1].uid, "222");

    // Item 1 is enriched
    assert_eq!(postings[0].salary.as_deref(), Some("€50,000/yr"));
    assert_eq!(postings[0].work_mode.as_deref(), Some("Full-time"));
    assert_eq!(postings[0].description, "<p>Build <b>things</b></p>");
    assert_eq!(
        postings[0]
            .extra_data
            .get("seniority")
            .and_then(|v| v.as_str()),
        Some("Mid-Senior level")
    );

    // Item 2 stays in its listed shape
    assert_eq!(postings[1].description, "");
    assert!(postings[1].salary.is_none());
    assert!(postings[1].work_mode.is_none());
    assert!(postings[1].extra_data.is_empty());
    assert!(!postings[1].is_enriched());
}

#[tokio::test]
async fn test_listing_fetch_error_is_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let harvester = create_harvester();
    let result = harvester
        .run_with_base_url(&base_url, "backend", "Madrid", None)
        .await;

    match result {
        Err(HarvestError::ListingStatus { status, .. }) => assert_eq!(status, 500),
        Err(e) => panic!("expected ListingStatus error, got {}", e),
        Ok(postings) => panic!("expected an error, got {} postings", postings.len()),
    }
}

#[tokio::test]
async fn test_empty_listing_yields_empty_run() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body><p>No results</p></body></html>"),
        )
        .mount(&mock_server)
        .await;

    let harvester = create_harvester();
    let postings = harvester
        .run_with_base_url(&base_url, "underwater basket weaving", "Atlantis", None)
        .await
        .expect("an empty listing is not an error");

    assert!(postings.is_empty());
}

#[tokio::test]
async fn test_detail_urls_hit_sequentially_with_posting_order_kept() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&[
            ("301", "First"),
            ("302", "Second"),
            ("303", "Third"),
        ])))
        .mount(&mock_server)
        .await;

    for uid in ["301", "302", "303"] {
        Mock::given(method("GET"))
            .and(path(format!("/jobs-guest/jobs/api/jobPosting/{}", uid)))
            .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_HTML))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let harvester = create_harvester();
    let postings = harvester
        .run_with_base_url(&base_url, "backend", "Madrid", Some("en"))
        .await
        .expect("run should succeed");

    let uids: Vec<&str> = postings.iter().map(|p| p.uid.as_str()).collect();
    assert_eq!(uids, ["301", "302", "303"]);
    assert!(postings.iter().all(|p| p.is_enriched()));
}

#[tokio::test]
async fn test_malformed_item_skipped_but_siblings_survive() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let listing = r#"<html><body><ul class="jobs-search__results-list">
          <li><div class="promo-banner">sponsored slot</div></li>
          <li>
            <div class="base-card" data-entity-urn="urn:li:jobPosting:401">
              <a class="base-card__full-link" href="https://example.invalid/jobs/view/401">ver</a>
              <h3 class="base-search-card__title">Survivor</h3>
              <h4 class="base-search-card__subtitle">Acme Corp</h4>
              <span class="job-search-card__location">Madrid</span>
            </div>
          </li>
        </ul></body></html>"#;

    Mock::given(method("GET"))
        .and(path("/jobs/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/jobs-guest/jobs/api/jobPosting/401"))
        .respond_with(ResponseTemplate::new(200).set_body_string(DETAIL_HTML))
        .mount(&mock_server)
        .await;

    let harvester = create_harvester();
    let postings = harvester
        .run_with_base_url(&base_url, "backend", "Madrid", Some("en"))
        .await
        .expect("run should succeed");

    assert_eq!(postings.len(), 1);
    assert_eq!(postings[0].uid, "401");
}
