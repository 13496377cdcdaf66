//! Decoder implementations

use super::types::ResponseDecoder;
use crate::error::{Error, Result};
use serde_json::Value;

/// JSON decoder
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl ResponseDecoder for JsonDecoder {
    fn decode(&self, body: &[u8]) -> Result<Value> {
        serde_json::from_slice(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))
    }
}
