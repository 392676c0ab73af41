//! Locale resolver for site domains and criteria labels
//!
//! The scraped site localizes both its domain and the job-criteria subheader
//! strings, so the pipeline matches scraped text against translated labels.
//! Dictionaries are a fixed, compile-time set (not user-extensible); the
//! resolver is constructed once at startup and passed in explicitly rather
//! than living in module-global state.

use serde_json::Value;
use std::collections::HashMap;

/// Language code used when the requested language is missing or unknown
pub const BASELINE_LANG: &str = "es";

const ES_DICTIONARY: &str = include_str!("es.json");
const EN_DICTIONARY: &str = include_str!("en.json");

/// The closed set of locale dictionaries
#[derive(Debug, Clone)]
pub struct Locales {
    dictionaries: HashMap<String, Value>,
}

impl Locales {
    /// Parses the embedded dictionaries
    ///
    /// Fails only if an embedded JSON resource is malformed, which is a
    /// packaging defect rather than a runtime condition.
    pub fn load() -> crate::Result<Self> {
        let mut dictionaries = HashMap::new();
        dictionaries.insert("es".to_string(), serde_json::from_str(ES_DICTIONARY)?);
        dictionaries.insert("en".to_string(), serde_json::from_str(EN_DICTIONARY)?);
        Ok(Self { dictionaries })
    }

    /// Returns a translator for the given language code
    ///
    /// `None` or an unknown code falls back to the baseline locale.
    pub fn translator(&self, lang: Option<&str>) -> Translator<'_> {
        let requested = lang.unwrap_or(BASELINE_LANG);
        let dictionary = self
            .dictionaries
            .get(requested)
            .or_else(|| self.dictionaries.get(BASELINE_LANG))
            .expect("baseline dictionary is always present");
        Translator { dictionary }
    }
}

/// A lookup handle bound to one locale dictionary
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    dictionary: &'a Value,
}

impl Translator<'_> {
    /// Resolves a dotted key against the dictionary
    ///
    /// Splits `key` on `.` and walks the nested dictionary. If any segment is
    /// missing, or the walk ends on a non-string node, the original key is
    /// returned unchanged. Never fails, so callers can use the result
    /// directly as a label to match against scraped text.
    pub fn translate(&self, key: &str) -> String {
        let mut current = self.dictionary;
        for segment in key.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => return key.to_string(),
            }
        }
        match current.as_str() {
            Some(text) => text.to_string(),
            None => key.to_string(),
        }
    }
}
