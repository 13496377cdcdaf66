//! HTTP transport module
//!
//! The iterator only needs one capability from the network: fetch the body
//! behind a URL. That capability is the [`Transport`] trait; [`HttpClient`]
//! is the default implementation over `reqwest`.
//!
//! # Features
//!
//! - **Base URL**: relative page URLs are resolved against a configured base
//! - **Rate Limiting**: optional token bucket pacing using governor
//! - **Status Mapping**: non-success responses become `Error::HttpStatus`
//!
//! Retries are deliberately absent: a failed fetch is returned to the caller.

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::Transport;
