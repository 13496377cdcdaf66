//! Decoder trait

use crate::error::Result;
use serde_json::Value;

/// Trait for decoding a raw response body into a JSON tree
pub trait ResponseDecoder: Send + Sync {
    /// Decode the full body into a single value
    fn decode(&self, body: &[u8]) -> Result<Value>;
}
