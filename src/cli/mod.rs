//! CLI module
//!
//! Command-line front end for walking a paginated resource. This is the
//! composition root: the only place where the default HTTP transport is
//! constructed and handed to the iterator.

mod commands;
mod runner;

pub use commands::{Cli, OutputFormat};
pub use runner::{RunSummary, Runner};
