//! Resource iterator engine
//!
//! Walks a paginated resource page by page and flattens the pages into one
//! lazy stream of items.
//!
//! # Overview
//!
//! For every page the engine:
//! 1. fetches the body through the [`Transport`] and counts the request
//! 2. decodes it through the [`ResponseDecoder`]
//! 3. decides where to go next: nowhere if the request ceiling is reached,
//!    otherwise the URL the [`PagePolicy`] points to
//! 4. extracts the item list and drops the decoded response
//! 5. hands the items out one at a time
//!
//! Nothing is fetched until the consumer asks for an item that is not already
//! buffered, so dropping the stream early leaves the remaining pages
//! untouched.

mod types;

pub use types::IterationState;

use crate::config::{ConfigOverrides, IteratorConfig};
use crate::decode::{extract_items, JsonDecoder, ResponseDecoder};
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::{PageNumberPolicy, PagePolicy};
use futures::stream::{self, Stream, TryStreamExt};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Iterator over the items of a page-numbered resource
pub type PagedResourceIterator = ResourceIterator<PageNumberPolicy>;

/// Lazily enumerates the items of a paginated resource
///
/// ```rust,no_run
/// use futures::TryStreamExt;
/// use page_walker::http::{HttpClient, HttpClientConfig};
/// use page_walker::{ConfigOverrides, ResourceIterator};
///
/// # async fn run() -> page_walker::Result<()> {
/// let client = HttpClient::with_config(
///     HttpClientConfig::builder().base_url("https://reqres.in/api/").build(),
/// )?;
///
/// let mut users = ResourceIterator::paged("users?page=1", client)
///     .with_config(ConfigOverrides::new().data("data"))
///     .max_requests(5);
///
/// let items = users.items();
/// futures::pin_mut!(items);
/// while let Some(user) = items.try_next().await? {
///     println!("{user}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct ResourceIterator<P = PageNumberPolicy> {
    url: String,
    config: IteratorConfig,
    policy: P,
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn ResponseDecoder>,
    state: IterationState,
    walked: bool,
}

/// One fetched page, already reduced to what the walk still needs
struct Page {
    items: Vec<Value>,
    next_url: Option<String>,
}

/// Progress of a single `items()` stream
struct Walk<'a, P> {
    iter: &'a mut ResourceIterator<P>,
    next_url: Option<String>,
    buffered: std::vec::IntoIter<Value>,
}

impl ResourceIterator<PageNumberPolicy> {
    /// Create an iterator that follows page numbers, starting at the page
    /// named in `url` (page 1 when absent)
    pub fn paged(url: impl Into<String>, transport: impl Transport + 'static) -> Self {
        Self::new(url, PageNumberPolicy::new(), transport)
    }
}

impl<P: PagePolicy> ResourceIterator<P> {
    /// Create an iterator for `url` with an explicit policy and transport
    pub fn new(url: impl Into<String>, policy: P, transport: impl Transport + 'static) -> Self {
        let url = url.into();
        Self {
            state: IterationState::new(url.clone()),
            url,
            config: IteratorConfig::default(),
            policy,
            transport: Arc::new(transport),
            decoder: Arc::new(JsonDecoder::new()),
            walked: false,
        }
    }

    /// Replace the transport used for subsequent requests
    #[must_use]
    pub fn with_client(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Replace the transport with one that is shared with other iterators
    #[must_use]
    pub fn with_shared_client(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the decoder used for subsequent responses
    #[must_use]
    pub fn with_decoder(mut self, decoder: impl ResponseDecoder + 'static) -> Self {
        self.decoder = Arc::new(decoder);
        self
    }

    /// Merge `overrides` into the current config
    #[must_use]
    pub fn with_config(mut self, overrides: ConfigOverrides) -> Self {
        self.config.merge(overrides);
        self
    }

    /// Stop after `max` requests; 0 removes the ceiling
    #[must_use]
    pub fn max_requests(mut self, max: u64) -> Self {
        self.state.max_requests = max;
        self
    }

    /// The URL the iterator starts from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The active config
    pub fn config(&self) -> &IteratorConfig {
        &self.config
    }

    /// The next-page policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Transport calls made so far
    pub fn request_count(&self) -> u64 {
        self.state.request_count
    }

    /// Current progress
    pub fn state(&self) -> &IterationState {
        &self.state
    }

    /// Lazily stream every item of every page
    ///
    /// The walk is single-pass: only the first call to `items()` (or
    /// `to_vec()`) visits the resource. Later calls return an empty stream
    /// and make no requests, even if the first stream was dropped early.
    ///
    /// A transport or decode failure is yielded as the `Err` item at the
    /// point where the failing page was needed, after which the stream ends.
    pub fn items(&mut self) -> impl Stream<Item = Result<Value>> + Send + '_ {
        let next_url = if self.walked {
            debug!("Walk of {} already started, nothing to yield", self.url);
            None
        } else {
            self.walked = true;
            self.policy.begin(&self.url, &self.config);
            Some(self.url.clone())
        };

        let walk = Walk {
            next_url,
            buffered: Vec::new().into_iter(),
            iter: self,
        };

        stream::try_unfold(walk, Walk::advance)
    }

    /// Fetch every page and collect all items
    pub async fn to_vec(&mut self) -> Result<Vec<Value>> {
        self.items().try_collect().await
    }

    /// Fetch, decode and reduce a single page
    async fn fetch_page(&mut self, url: String) -> Result<Page> {
        debug!(
            "Requesting page {} of {}: {}",
            self.state.request_count + 1,
            self.url,
            url
        );

        let fetched = self.transport.fetch(&url).await;
        self.state.current_url = url;
        self.state.request_count += 1;

        let response = self.decoder.decode(&fetched?)?;
        let next_url = self.next_url(&response);
        let items = extract_items(response, &self.config.data);

        debug!(
            "Page {} yielded {} items",
            self.state.request_count,
            items.len()
        );

        Ok(Page { items, next_url })
    }

    /// URL of the page after the one that produced `response`
    fn next_url(&self, response: &Value) -> Option<String> {
        if self.state.ceiling_reached() {
            debug!(
                "Request ceiling of {} reached, stopping",
                self.state.max_requests
            );
            return None;
        }

        let next = self
            .policy
            .next_url(&self.url, response, &self.state, &self.config);
        if next.is_none() {
            debug!(
                "No page after request {}, stopping",
                self.state.request_count
            );
        }
        next
    }
}

impl<P: PagePolicy> Walk<'_, P> {
    /// Produce the next item, fetching the next page only when the buffer is empty
    async fn advance(mut self) -> Result<Option<(Value, Self)>> {
        loop {
            if let Some(item) = self.buffered.next() {
                return Ok(Some((item, self)));
            }

            let Some(url) = self.next_url.take() else {
                return Ok(None);
            };

            let page = self.iter.fetch_page(url).await?;
            self.buffered = page.items.into_iter();
            self.next_url = page.next_url;
        }
    }
}

impl<P: std::fmt::Debug> std::fmt::Debug for ResourceIterator<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceIterator")
            .field("url", &self.url)
            .field("config", &self.config)
            .field("policy", &self.policy)
            .field("state", &self.state)
            .field("walked", &self.walked)
            .finish_non_exhaustive()
    }
}
