//! Configuration module for jobharvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every field has a default, so the pipeline also runs without a
//! config file at all.
//!
//! # Example
//!
//! ```no_run
//! use jobharvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Request timeout: {}s", config.http.request_timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HarvesterConfig, HttpConfig};

// Re-export parser functions
pub use parser::load_config;
