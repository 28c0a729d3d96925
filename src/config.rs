//! Page configuration from the optional `#page-config` script block.

use page::config::{ConfigError, PageConfig};

use crate::dom::{Dom, PAGE_CONFIG};

/// Resolve the configuration from an optional JSON document.
///
/// A missing or blank block means defaults. An invalid one also means
/// defaults, with the error handed back so it can be logged once logging is
/// up.
#[must_use]
pub fn resolve(raw: Option<&str>) -> (PageConfig, Option<ConfigError>) {
    match raw.map(str::trim).filter(|text| !text.is_empty()) {
        None => (PageConfig::default(), None),
        Some(text) => match PageConfig::from_json(text) {
            Ok(config) => (config, None),
            Err(err) => (PageConfig::default(), Some(err)),
        },
    }
}

pub fn load(dom: &Dom) -> (PageConfig, Option<ConfigError>) {
    let raw = dom
        .document
        .query_selector(PAGE_CONFIG)
        .ok()
        .flatten()
        .and_then(|element| element.text_content());
    resolve(raw.as_deref())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
