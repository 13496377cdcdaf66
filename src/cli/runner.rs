//! CLI runner - wires the HTTP client to the iterator and prints items

use crate::cli::commands::{Cli, OutputFormat};
use crate::config::{load_overrides, ConfigOverrides};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::iterator::ResourceIterator;
use futures::TryStreamExt;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::info;

/// Totals for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Items written
    pub items: u64,
    /// Requests made
    pub requests: u64,
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run and print items to stdout
    pub async fn run(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out).await
    }

    /// Run and print items to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        let start = Instant::now();
        let client = HttpClient::with_config(self.http_config())?;

        let mut iter = ResourceIterator::paged(self.cli.url.clone(), client)
            .with_config(self.overrides()?)
            .max_requests(self.cli.max_requests);

        let mut written = 0;
        {
            let items = iter.items();
            futures::pin_mut!(items);

            while let Some(item) = items.try_next().await? {
                match self.cli.format {
                    OutputFormat::Json => serde_json::to_writer(&mut *out, &item)?,
                    OutputFormat::Pretty => serde_json::to_writer_pretty(&mut *out, &item)?,
                }
                writeln!(out)?;
                written += 1;
            }
        }
        out.flush()?;

        let summary = RunSummary {
            items: written,
            requests: iter.request_count(),
        };
        info!(
            "Fetched {} items in {} requests ({:.2?})",
            summary.items,
            summary.requests,
            start.elapsed()
        );

        Ok(summary)
    }

    /// Field-name overrides: the config file first, then individual flags
    fn overrides(&self) -> Result<ConfigOverrides> {
        let from_file = match &self.cli.config {
            Some(path) => load_overrides(path)?,
            None => ConfigOverrides::default(),
        };

        let from_flags = ConfigOverrides {
            page: self.cli.page_param.clone(),
            data: self.cli.data_path.clone(),
            total_pages: self.cli.total_pages_path.clone(),
        };

        Ok(from_file.and(from_flags))
    }

    fn http_config(&self) -> HttpClientConfig {
        let mut builder =
            HttpClientConfig::builder().timeout(Duration::from_secs(self.cli.timeout_secs));

        if let Some(base) = &self.cli.base_url {
            builder = builder.base_url(base);
        }
        if let Some(rps) = self.cli.rate_limit {
            builder = builder.rate_limit(RateLimiterConfig::per_second(rps));
        }
        for (name, value) in &self.cli.headers {
            builder = builder.header(name, value);
        }

        builder.build()
    }
}
