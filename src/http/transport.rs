//! Transport trait

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// Fetches the raw body behind a URL
///
/// Implementations decide how the URL is interpreted (absolute, relative to a
/// base, a key into fixtures). Errors are propagated to whoever is driving
/// the iterator; nothing in this crate retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the body for `url`
    async fn fetch(&self, url: &str) -> Result<Bytes>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        (**self).fetch(url).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        (**self).fetch(url).await
    }
}
