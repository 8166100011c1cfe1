//! URL helpers for backend requests

/// Ensure a base URL ends with exactly one `/`
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::normalize_base_url;
/// assert_eq!(normalize_base_url("http://localhost:8000"), "http://localhost:8000/");
/// ```
pub fn normalize_base_url(base: &str) -> String {
    format!("{}/", base.trim().trim_end_matches('/'))
}

/// Join a normalized base URL and a relative API path
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("http://localhost:8000/", "activities/fetch");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path.trim_start_matches('/'))
}
