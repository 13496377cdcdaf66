//! Iterator state

/// Snapshot of an iterator's progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationState {
    /// URL of the most recent request (the start URL before any request)
    pub current_url: String,
    /// Transport calls made so far by this instance
    pub request_count: u64,
    /// Request ceiling, 0 = unbounded
    pub max_requests: u64,
}

impl IterationState {
    /// Create the state of a fresh iterator for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            current_url: url.into(),
            request_count: 0,
            max_requests: 0,
        }
    }

    /// Check whether the request ceiling has been reached
    pub fn ceiling_reached(&self) -> bool {
        self.max_requests > 0 && self.request_count >= self.max_requests
    }
}
