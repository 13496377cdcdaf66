//! Query parameter lookup and replacement

use regex::{Match, Regex};
use std::sync::LazyLock;

/// One `name=value` pair: preceded by `?` or `&`, the value running up to the
/// next `&` or the end of the URL
static PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]([^=&?]*)=([^&]*)").unwrap());

/// Span of the value of the first pair whose name is exactly `name`
fn find_value<'a>(url: &'a str, name: &str) -> Option<Match<'a>> {
    PARAM_REGEX
        .captures_iter(url)
        .find(|caps| &caps[1] == name)
        .and_then(|caps| caps.get(2))
}

/// Get the first value bound to `name` in the query string of `url`
///
/// Returns `None` when the parameter does not occur. A parameter written as
/// `name=` is present with an empty value.
///
/// # Examples
///
/// ```
/// use page_walker::query::get_query_param;
///
/// assert_eq!(get_query_param("users?page=2&per_page=50", "page"), Some("2"));
/// assert_eq!(get_query_param("users?per_page=50", "page"), None);
/// ```
pub fn get_query_param<'a>(url: &'a str, name: &str) -> Option<&'a str> {
    find_value(url, name).map(|m| m.as_str())
}

/// Bind `name` to `value` in the query string of `url`
///
/// - An existing occurrence has its value replaced in place (first one wins).
/// - Otherwise `name=value` is appended after `&`, or after `?` when the URL
///   has no query string yet.
///
/// `value` is written verbatim and must already be URL-safe.
///
/// # Examples
///
/// ```
/// use page_walker::query::set_query_param;
///
/// assert_eq!(set_query_param("users?page=1&order=name", "page", "2"), "users?page=2&order=name");
/// assert_eq!(set_query_param("users?order=name", "page", "2"), "users?order=name&page=2");
/// assert_eq!(set_query_param("users", "page", "2"), "users?page=2");
/// ```
pub fn set_query_param(url: &str, name: &str, value: &str) -> String {
    if let Some(existing) = find_value(url, name) {
        let mut rewritten = String::with_capacity(url.len() + value.len());
        rewritten.push_str(&url[..existing.start()]);
        rewritten.push_str(value);
        rewritten.push_str(&url[existing.end()..]);
        return rewritten;
    }

    let separator = match url.find('?') {
        // A dangling `?` or `&` already separates the new pair
        Some(_) if url.ends_with('?') || url.ends_with('&') => "",
        Some(_) => "&",
        None => "?",
    };

    format!("{url}{separator}{name}={value}")
}
