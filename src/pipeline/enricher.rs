//! Detail page enricher
//!
//! Fetches a posting's detail endpoint and merges salary, description, and
//! the classified criteria rows into the record. This stage carries the
//! pipeline's core resilience contract: any failure for a single item is
//! caught and logged, and the item is returned in its *listed* stage
//! untouched, so one unreachable or malformed detail page never fails the
//! whole run.

use crate::locale::Translator;
use crate::model::JobPosting;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;
use tracing::{debug, warn};

/// Destination of a classified criteria row
#[derive(Debug, Clone, Copy, PartialEq)]
enum CriteriaField {
    Seniority,
    WorkMode,
    Responsability,
    Sectors,
}

/// Builds the ordered (label, field) match table for a locale
///
/// Order is a behavioral contract: subheaders are tested against each label
/// in sequence and the first containment match wins. Matching is loose on
/// purpose (substring, case-sensitive, trim only) because the site's markup
/// is inconsistent about whitespace and punctuation around the labels.
fn criteria_labels(translator: &Translator<'_>) -> [(String, CriteriaField); 4] {
    [
        (
            translator.translate("linkedin.jobFields.seniority"),
            CriteriaField::Seniority,
        ),
        (
            translator.translate("linkedin.jobFields.work_mode"),
            CriteriaField::WorkMode,
        ),
        (
            translator.translate("linkedin.jobFields.responsability"),
            CriteriaField::Responsability,
        ),
        (
            translator.translate("linkedin.jobFields.sectors"),
            CriteriaField::Sectors,
        ),
    ]
}

/// Enriches one posting from its detail endpoint
///
/// On success returns the posting with detail fields merged in. On any
/// failure (network, status, read) the error is logged with the item's
/// identifier and the input posting is returned unchanged; the listed stage
/// is a valid terminal state.
pub async fn enrich_posting(
    client: &Client,
    posting: JobPosting,
    translator: &Translator<'_>,
) -> JobPosting {
    match fetch_detail(client, &posting.api_url).await {
        Ok(body) => {
            debug!("Enriching posting {} ({} bytes)", posting.uid, body.len());
            merge_detail(posting, &body, translator)
        }
        Err(e) => {
            warn!("Failed to fetch details for job {}: {}", posting.uid, e);
            posting
        }
    }
}

/// Fetches the detail page body, treating non-success statuses as errors
async fn fetch_detail(client: &Client, api_url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(api_url).send().await?.error_for_status()?;
    response.text().await
}

/// Merges detail markup into a posting
///
/// Pure with respect to I/O; exercised directly by unit tests.
fn merge_detail(mut posting: JobPosting, html: &str, translator: &Translator<'_>) -> JobPosting {
    let document = Html::parse_document(html);

    posting.salary = select_trimmed_text(&document, ".salary.compensation__salary")
        .filter(|text| !text.is_empty());

    // Inner HTML of the show-more/less container, raw and unsanitized.
    posting.description = select_inner_html(&document, ".show-more-less-html__markup")
        .map(|fragment| fragment.trim().to_string())
        .unwrap_or_default();

    let labels = criteria_labels(translator);

    if let Ok(item_selector) = Selector::parse(".description__job-criteria-item") {
        for item in document.select(&item_selector) {
            let subheader = element_text(item, ".description__job-criteria-subheader");
            let value = element_text(item, ".description__job-criteria-text");

            // First matching label wins; a subheader matching none is ignored.
            let matched = labels
                .iter()
                .find(|(label, _)| subheader.contains(label.as_str()));

            match matched {
                Some((_, CriteriaField::Seniority)) => {
                    posting
                        .extra_data
                        .insert("seniority".to_string(), Value::String(value));
                }
                Some((_, CriteriaField::WorkMode)) => {
                    posting.work_mode = Some(value);
                }
                Some((_, CriteriaField::Responsability)) => {
                    posting
                        .extra_data
                        .insert("responsability".to_string(), Value::String(value));
                }
                Some((_, CriteriaField::Sectors)) => {
                    posting.sectors = Some(value);
                }
                None => {}
            }
        }
    }

    posting
}

/// Trimmed text of the first match in the whole document
fn select_trimmed_text(document: &Html, selector: &str) -> Option<String> {
    let parsed = Selector::parse(selector).ok()?;
    document
        .select(&parsed)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
}

/// Inner HTML of the first match in the whole document
fn select_inner_html(document: &Html, selector: &str) -> Option<String> {
    let parsed = Selector::parse(selector).ok()?;
    document.select(&parsed).next().map(|e| e.inner_html())
}

/// Trimmed text of the first match under an element, or empty
fn element_text(scope: ElementRef, selector: &str) -> String {
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
