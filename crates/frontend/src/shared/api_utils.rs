//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Used when the build sets no `PPO_API_BASE`
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Get the base URL for API requests
///
/// Taken from the `PPO_API_BASE` environment variable at build time,
/// without a trailing slash.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/pricing/summary", api_base());
/// ```
pub fn api_base() -> String {
    resolve_base(option_env!("PPO_API_BASE"))
}

fn resolve_base(configured: Option<&str>) -> String {
    let base = configured
        .map(str::trim)
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    base.trim_end_matches('/').to_string()
}

/// Build a full API URL from a path relative to the API base
///
/// # Example
/// ```rust,ignore
/// let url = api_url("promotion/performance");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base() {
        assert_eq!(resolve_base(None), "http://127.0.0.1:8000/api");
        assert_eq!(resolve_base(Some("  ")), "http://127.0.0.1:8000/api");
        assert_eq!(
            resolve_base(Some("https://ppo.example.com/api/")),
            "https://ppo.example.com/api"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://127.0.0.1:8000/api", "pricing/summary"),
            "http://127.0.0.1:8000/api/pricing/summary"
        );
        assert_eq!(
            join_url("http://127.0.0.1:8000/api/", "/promotion/export/ppg"),
            "http://127.0.0.1:8000/api/promotion/export/ppg"
        );
    }
}
