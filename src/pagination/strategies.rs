//! Pagination strategy implementations

use super::types::PagePolicy;
use crate::config::IteratorConfig;
use crate::decode::extract_u64;
use crate::iterator::IterationState;
use crate::query::get_query_param;
use serde_json::Value;
use tracing::warn;

/// Page used when the URL does not name one
pub const DEFAULT_START_PAGE: u64 = 1;

// ============================================================================
// Page Number Pagination
// ============================================================================

/// Page number pagination (e.g., `?page=2` with `"total_pages": 5` in the body)
///
/// The start page is read once from the initial URL. Each request advances
/// the page by one, so after `n` requests the next page is `start + n`.
/// Pagination ends once `start + n` would pass the total page count reported
/// by the last response. A response without a usable count is treated as
/// reporting `start`, which ends pagination after the current page.
#[derive(Debug, Clone, Default)]
pub struct PageNumberPolicy {
    start_page: Option<u64>,
}

impl PageNumberPolicy {
    /// Create a new page number policy
    pub fn new() -> Self {
        Self::default()
    }

    /// The resolved start page, `None` until iteration has begun
    pub fn start_page(&self) -> Option<u64> {
        self.start_page
    }
}

impl PagePolicy for PageNumberPolicy {
    fn begin(&mut self, url: &str, config: &IteratorConfig) {
        if self.start_page.is_none() {
            self.start_page = Some(resolve_start_page(url, &config.page));
        }
    }

    fn next_page(
        &self,
        response: &Value,
        state: &IterationState,
        config: &IteratorConfig,
    ) -> Option<String> {
        let start = self.start_page.unwrap_or(DEFAULT_START_PAGE);
        let total = extract_u64(response, &config.total_pages).unwrap_or(start);

        if total < start || total - start < state.request_count {
            return None;
        }

        Some((start + state.request_count).to_string())
    }
}

/// Read the start page from the `param` query parameter of `url`
fn resolve_start_page(url: &str, param: &str) -> u64 {
    match get_query_param(url, param) {
        None => DEFAULT_START_PAGE,
        Some(raw) => match raw.parse::<u64>() {
            Ok(page) if page >= 1 => page,
            _ => {
                warn!(
                    "Ignoring unusable start page '{}' in {}, starting at {}",
                    raw, url, DEFAULT_START_PAGE
                );
                DEFAULT_START_PAGE
            }
        },
    }
}
