//! Startup configuration
//!
//! The backend address is read from the served page, so pointing the app at
//! another host only needs an edit to `index.html`:
//!
//! ```html
//! <meta name="api-base-url" content="https://stats.example.org/" />
//! ```

use crate::shared::api_utils::normalize_base_url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/";

const API_BASE_META: &str = "api-base-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Always ends with `/`
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }
}

impl AppConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
        }
    }

    /// Resolve from the page's `<meta name="api-base-url">`, falling back to the default
    pub fn load() -> Self {
        match read_meta(API_BASE_META) {
            Some(url) => {
                log::info!("Using API base URL from page: {}", url);
                Self::with_base_url(&url)
            }
            None => {
                log::info!("Using default API base URL: {}", DEFAULT_API_BASE_URL);
                Self::default()
            }
        }
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    let element = document.query_selector(&selector).ok()??;
    element
        .get_attribute("content")
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}
