//! Jobharvest: a LinkedIn job-posting extraction pipeline
//!
//! This crate fetches a job search results page, parses it into normalized
//! posting records, and enriches each record from its detail page, tolerating
//! per-item failure so one broken listing never aborts the batch.

pub mod config;
pub mod locale;
pub mod model;
pub mod pipeline;

use thiserror::Error;

/// Main error type for jobharvest operations
///
/// Only batch-fatal conditions are represented here: a listing page that
/// cannot be fetched or read. Per-item enrichment failures are handled inside
/// the pipeline and never surface as this type.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Listing fetch for {url} returned HTTP {status}")]
    ListingStatus { url: String, status: u16 },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for jobharvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use locale::{Locales, Translator};
pub use model::JobPosting;
pub use pipeline::Harvester;
