// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # page-walker
//!
//! Lazily walk every item of a paginated HTTP resource.
//!
//! ## Features
//!
//! - **Lazy Streams**: pages are requested only when the consumer needs their items
//! - **Page Numbers**: follows `?page=N` until the reported total page count is reached
//! - **Request Ceiling**: cap the number of requests independently of the server
//! - **Query Preservation**: only the page parameter of the URL is ever rewritten
//! - **Pluggable Collaborators**: bring your own transport, decoder or next-page policy
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use page_walker::http::{HttpClient, HttpClientConfig};
//! use page_walker::{ConfigOverrides, ResourceIterator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = HttpClient::with_config(
//!         HttpClientConfig::builder().base_url("https://reqres.in/api").build(),
//!     )?;
//!
//!     let mut users = ResourceIterator::paged("users?page=1", client)
//!         .with_config(ConfigOverrides::new().total_pages("total_pages"))
//!         .max_requests(10);
//!
//!     for user in users.to_vec().await? {
//!         println!("{user}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      ResourceIterator                        │
//! │   items() → Stream<Item>      to_vec() → Vec<Item>           │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┼───────────────┬────────────────┐
//! │  Transport   │   Decoder    │  PagePolicy   │  Query Codec   │
//! ├──────────────┼──────────────┼───────────────┼────────────────┤
//! │ HttpClient   │ JsonDecoder  │ PageNumber    │ get / set      │
//! │ Rate Limit   │ Path Extract │               │ one parameter  │
//! └──────────────┴──────────────┴───────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
#[allow(missing_docs)]
pub mod error;

/// Iterator configuration and override loading
pub mod config;

/// Query-parameter codec
pub mod query;

/// Response decoding and field extraction
pub mod decode;

/// Transport trait and the default HTTP client
pub mod http;

/// Next-page policies
pub mod pagination;

/// The resource iterator engine
pub mod iterator;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{ConfigOverrides, IteratorConfig};
pub use error::{Error, Result};
pub use iterator::{IterationState, PagedResourceIterator, ResourceIterator};
pub use pagination::{PageNumberPolicy, PagePolicy};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
