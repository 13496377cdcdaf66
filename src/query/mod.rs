//! Query-parameter codec
//!
//! Reads and rewrites a single named parameter inside a URL's query string.
//!
//! # Overview
//!
//! Values are treated as opaque substrings: nothing is percent-decoded on
//! read and nothing is escaped on write. Every other parameter, including its
//! position and its exact spelling, is preserved byte for byte. This lets the
//! iterator address successive pages of a resource by rewriting only the page
//! parameter of the URL the caller supplied.

mod params;

pub use params::{get_query_param, set_query_param};
