//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Walk every page of a paginated HTTP resource and print its items
#[derive(Parser, Debug)]
#[command(name = "page-walker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL of the first page (absolute, or relative to --base-url)
    pub url: String,

    /// Base URL that relative page URLs are resolved against
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Query parameter carrying the page number
    #[arg(long)]
    pub page_param: Option<String>,

    /// Response field holding the items ("" = whole response)
    #[arg(long)]
    pub data_path: Option<String>,

    /// Response field holding the total page count
    #[arg(long)]
    pub total_pages_path: Option<String>,

    /// Field-name overrides file (YAML or JSON); flags take precedence
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Stop after this many requests (0 = no limit)
    #[arg(short, long, default_value = "0")]
    pub max_requests: u64,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Maximum requests per second
    #[arg(long)]
    pub rate_limit: Option<u32>,

    /// Extra request header, `Name: value` (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One compact JSON item per line
    Json,
    /// Indented JSON per item
    Pretty,
}

fn parse_header(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Name: value`, got '{raw}'"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing header name in '{raw}'"));
    }

    Ok((name.to_string(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::parse_from(["page-walker", "https://api.example.com/users"]);

        assert_eq!(cli.url, "https://api.example.com/users");
        assert_eq!(cli.max_requests, 0);
        assert_eq!(cli.timeout_secs, 30);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.headers.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::parse_from([
            "page-walker",
            "users?page=2",
            "--base-url",
            "https://api.example.com",
            "--page-param",
            "p",
            "--data-path",
            "",
            "--total-pages-path",
            "meta.pages",
            "-m",
            "3",
            "--rate-limit",
            "5",
            "-H",
            "Accept: application/json",
            "--format",
            "pretty",
            "-v",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(cli.page_param.as_deref(), Some("p"));
        assert_eq!(cli.data_path.as_deref(), Some(""));
        assert_eq!(cli.total_pages_path.as_deref(), Some("meta.pages"));
        assert_eq!(cli.max_requests, 3);
        assert_eq!(cli.rate_limit, Some(5));
        assert_eq!(
            cli.headers,
            vec![("Accept".to_string(), "application/json".to_string())]
        );
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("X-Token:  abc:def "),
            Ok(("X-Token".to_string(), "abc:def".to_string()))
        );
        assert!(parse_header("no-colon").is_err());
        assert!(parse_header(": value").is_err());
    }

    #[test]
    fn test_rejects_bad_header_flag() {
        let result = Cli::try_parse_from(["page-walker", "users", "-H", "broken"]);
        assert!(result.is_err());
    }
}
