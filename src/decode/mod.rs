//! Response decoder module
//!
//! # Overview
//!
//! Turns a raw response body into a `serde_json::Value` tree and resolves
//! extraction paths (the item list, the total-page count) against it.
//! Extraction never fails: a missing or oddly shaped field resolves to the
//! caller's default.

mod decoders;
mod path;
mod types;

pub use decoders::JsonDecoder;
pub use path::{extract_items, extract_u64, lookup};
pub use types::ResponseDecoder;

#[cfg(test)]
mod tests;
