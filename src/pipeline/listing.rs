//! Listing page parser
//!
//! Turns the raw search results markup into partial posting records (the
//! *listed* lifecycle stage). This is a pure function: no I/O, no mutation
//! of input.

use crate::model::JobPosting;
use chrono::{DateTime, NaiveDate, Utc};
use scraper::{ElementRef, Html, Selector};
use serde_json::Map;

/// Parses listing markup into posting records
///
/// Selects each result-list item and extracts the fields the search page
/// carries: entity identifier, title, company, location, post date, and the
/// canonical link. Items whose card container is structurally absent yield
/// no record at all rather than a record with empty fields; that slot is
/// treated as "not a real result row", not logged as an error.
///
/// # Arguments
///
/// * `html` - Raw listing markup
/// * `keyword` - The search term that produced this page
/// * `base_url` - Site base URL, used to template each record's detail URL
pub fn parse_listing(html: &str, keyword: &str, base_url: &str) -> Vec<JobPosting> {
    let document = Html::parse_document(html);

    let item_selector = match Selector::parse(".jobs-search__results-list > li") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&item_selector)
        .filter_map(|item| parse_card(item, keyword, base_url))
        .collect()
}

/// Parses one result-list item, or None when its card container is missing
fn parse_card(item: ElementRef, keyword: &str, base_url: &str) -> Option<JobPosting> {
    let card_selector = Selector::parse("div.base-card").ok()?;
    let card = item.select(&card_selector).next()?;

    // Entity identifier: substring after the last ':' of the URN attribute,
    // empty string when the attribute is absent.
    let uid = card
        .value()
        .attr("data-entity-urn")
        .and_then(|urn| urn.rsplit(':').next())
        .unwrap_or("")
        .to_string();

    let role_name = select_text(card, ".base-search-card__title");
    let company_name = select_text(card, ".base-search-card__subtitle");
    let location = select_text(card, ".job-search-card__location");

    let post_date = select_attr(card, ".job-search-card__listdate", "datetime")
        .and_then(|datetime| parse_post_date(&datetime))
        .unwrap_or_else(Utc::now);

    let raw_url = select_attr(card, ".base-card__full-link", "href").unwrap_or_default();
    let url = raw_url
        .split('?')
        .next()
        .unwrap_or(raw_url.as_str())
        .to_string();

    Some(JobPosting {
        api_url: detail_api_url(base_url, &uid),
        uid,
        role_name,
        company_name,
        location,
        post_date,
        description: String::new(),
        salary: None,
        work_mode: None,
        job_type: None,
        sectors: None,
        extra_data: Map::new(),
        url,
        keyword: keyword.to_string(),
    })
}

/// Templates the detail-endpoint URL for an entity identifier
pub fn detail_api_url(base_url: &str, uid: &str) -> String {
    format!("{}/jobs-guest/jobs/api/jobPosting/{}?trackingId=", base_url, uid)
}

/// Trimmed text content of the first element matching `selector`, or empty
fn select_text(scope: ElementRef, selector: &str) -> String {
    Selector::parse(selector)
        .ok()
        .and_then(|s| {
            scope
                .select(&s)
                .next()
                .map(|element| element.text().collect::<String>().trim().to_string())
        })
        .unwrap_or_default()
}

/// Attribute value of the first element matching `selector`
fn select_attr(scope: ElementRef, selector: &str, attr: &str) -> Option<String> {
    let parsed = Selector::parse(selector).ok()?;
    scope
        .select(&parsed)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.to_string())
}

/// Parses a `datetime` attribute value into a UTC timestamp
///
/// The site emits either a full RFC 3339 timestamp or a bare date; a bare
/// date is taken as midnight UTC.
fn parse_post_date(datetime: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(datetime) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(datetime, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
