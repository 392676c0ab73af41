//! Posting record produced by the extraction pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A normalized job posting
///
/// A record moves through two lifecycle stages: *listed* (fields available
/// from the search results page only, `description` empty) and *enriched*
/// (detail fields merged in). A record may stay listed forever if its detail
/// fetch fails; that is a valid terminal state, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// Site-internal entity identifier, empty string when the listing card
    /// carries no entity URN. Set once during listing parse, never mutated.
    pub uid: String,

    pub role_name: String,

    pub company_name: String,

    pub location: String,

    /// Posting date from the listing card's `datetime` attribute; falls back
    /// to fetch time when the site omits a parseable date (an approximation,
    /// not a scrape failure).
    pub post_date: DateTime<Utc>,

    /// Raw description HTML fragment, empty until enriched. No tag
    /// sanitation is performed; consumers must treat this as unsafe HTML.
    pub description: String,

    /// Detail-endpoint URL, fully determined by the base URL and `uid`.
    pub api_url: String,

    pub salary: Option<String>,

    pub work_mode: Option<String>,

    /// Always unset in current scope; kept for wire compatibility.
    #[serde(rename = "type")]
    pub job_type: Option<String>,

    pub sectors: Option<String>,

    /// Open map holding `seniority`, `responsability`, and any future
    /// unstructured fields.
    pub extra_data: Map<String, Value>,

    /// Canonical posting URL with the query string stripped.
    pub url: String,

    /// The search term that produced this record.
    pub keyword: String,
}

impl JobPosting {
    /// Whether detail fields have been merged into this record
    pub fn is_enriched(&self) -> bool {
        !self.description.is_empty()
            || self.salary.is_some()
            || self.work_mode.is_some()
            || self.sectors.is_some()
            || !self.extra_data.is_empty()
    }
}
