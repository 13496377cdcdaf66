//! Pagination traits

use crate::config::IteratorConfig;
use crate::iterator::IterationState;
use crate::query::set_query_param;
use serde_json::Value;

/// Computes where the page after the one just fetched lives
///
/// `next_page` has no default: every strategy must state when pagination
/// ends. The engine only calls `next_url`, which by default writes the
/// `next_page` token into the page parameter of the start URL. Strategies
/// that receive whole URLs (link headers, `next` links in the body)
/// override `next_url` instead.
pub trait PagePolicy: Send {
    /// Called when iteration begins, before the first request
    ///
    /// `url` is the URL the iterator was constructed with.
    fn begin(&mut self, _url: &str, _config: &IteratorConfig) {}

    /// Token for the next page, or `None` when there are no more pages
    ///
    /// `response` is the decoded body of the page just fetched and
    /// `state.request_count` already includes that request.
    fn next_page(
        &self,
        response: &Value,
        state: &IterationState,
        config: &IteratorConfig,
    ) -> Option<String>;

    /// URL of the next page, or `None` when there are no more pages
    fn next_url(
        &self,
        start_url: &str,
        response: &Value,
        state: &IterationState,
        config: &IteratorConfig,
    ) -> Option<String> {
        self.next_page(response, state, config)
            .map(|token| set_query_param(start_url, &config.page, &token))
    }
}

impl<P: PagePolicy + ?Sized> PagePolicy for Box<P> {
    fn begin(&mut self, url: &str, config: &IteratorConfig) {
        (**self).begin(url, config);
    }

    fn next_page(
        &self,
        response: &Value,
        state: &IterationState,
        config: &IteratorConfig,
    ) -> Option<String> {
        (**self).next_page(response, state, config)
    }

    fn next_url(
        &self,
        start_url: &str,
        response: &Value,
        state: &IterationState,
        config: &IteratorConfig,
    ) -> Option<String> {
        (**self).next_url(start_url, response, state, config)
    }
}
