//! Iterator configuration
//!
//! `IteratorConfig` maps the logical roles the iterator needs (page parameter,
//! item list, total page count) to the field names a particular API uses.
//! `ConfigOverrides` is the partial form callers merge on top of the defaults,
//! either built in code or loaded from a YAML/JSON file.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Iterator Config
// ============================================================================

/// Field names used to address pages and read responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IteratorConfig {
    /// Query parameter that carries the page token
    #[serde(default = "default_page")]
    pub page: String,

    /// Response field holding the item list (empty = the whole response)
    #[serde(default = "default_data")]
    pub data: String,

    /// Response field holding the total page count (page-number pagination only)
    #[serde(default = "default_total_pages", alias = "totalPages")]
    pub total_pages: String,
}

fn default_page() -> String {
    "page".to_string()
}

fn default_data() -> String {
    "data".to_string()
}

fn default_total_pages() -> String {
    "total_pages".to_string()
}

impl Default for IteratorConfig {
    fn default() -> Self {
        Self {
            page: default_page(),
            data: default_data(),
            total_pages: default_total_pages(),
        }
    }
}

impl IteratorConfig {
    /// Create the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every key set in `overrides`, leaving the others untouched
    pub fn merge(&mut self, overrides: ConfigOverrides) {
        if let Some(page) = overrides.page {
            self.page = page;
        }
        if let Some(data) = overrides.data {
            self.data = data;
        }
        if let Some(total_pages) = overrides.total_pages {
            self.total_pages = total_pages;
        }
    }

    /// Return a copy with `overrides` merged in
    #[must_use]
    pub fn merged(mut self, overrides: ConfigOverrides) -> Self {
        self.merge(overrides);
        self
    }
}

// ============================================================================
// Config Overrides
// ============================================================================

/// A partial `IteratorConfig`
///
/// Unset keys keep their current value when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Page query parameter name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    /// Item list path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    /// Total page count path
    #[serde(
        default,
        alias = "totalPages",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_pages: Option<String>,
}

impl ConfigOverrides {
    /// Create an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the page query parameter name
    #[must_use]
    pub fn page(mut self, name: impl Into<String>) -> Self {
        self.page = Some(name.into());
        self
    }

    /// Override the item list path
    #[must_use]
    pub fn data(mut self, path: impl Into<String>) -> Self {
        self.data = Some(path.into());
        self
    }

    /// Override the total page count path
    #[must_use]
    pub fn total_pages(mut self, path: impl Into<String>) -> Self {
        self.total_pages = Some(path.into());
        self
    }

    /// Overlay `other` on top of `self`, keys set in `other` win
    #[must_use]
    pub fn and(mut self, other: ConfigOverrides) -> Self {
        if other.page.is_some() {
            self.page = other.page;
        }
        if other.data.is_some() {
            self.data = other.data;
        }
        if other.total_pages.is_some() {
            self.total_pages = other.total_pages;
        }
        self
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Parse overrides from a YAML (or JSON) document
pub fn load_overrides_from_str(content: &str) -> Result<ConfigOverrides> {
    if content.trim().is_empty() {
        return Ok(ConfigOverrides::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Load overrides from a file; `.json` files are parsed as JSON, anything else as YAML
pub fn load_overrides(path: impl AsRef<Path>) -> Result<ConfigOverrides> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        load_overrides_from_str(&content)
    }
}
