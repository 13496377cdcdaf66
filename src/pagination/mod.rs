//! Pagination module
//!
//! # Overview
//!
//! The iterator engine knows how to fetch a page and hand out its items; it
//! does not know how an API numbers its pages. That decision lives behind the
//! [`PagePolicy`] trait: after every page the engine asks the policy for the
//! next page token, and stops when there is none.
//!
//! [`PageNumberPolicy`] is the page-number strategy: the token is an absolute
//! page index and the response reports how many pages exist.

mod strategies;
mod types;

pub use strategies::{PageNumberPolicy, DEFAULT_START_PAGE};
pub use types::PagePolicy;
