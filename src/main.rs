// Allow common clippy pedantic lints
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_async)]

//! page-walker CLI
//!
//! Walks a paginated resource and prints its items, one per line

use anyhow::Context;
use clap::Parser;
use page_walker::cli::{Cli, Runner};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for items
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let url = cli.url.clone();
    Runner::new(cli)
        .run()
        .await
        .with_context(|| format!("Failed to walk {url}"))?;

    Ok(())
}
