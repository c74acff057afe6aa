//! API Configuration
//!
//! Backend root, taken from `FINDIT_API_BASE` at build time or the page origin.

use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn from_env() -> Self {
        match option_env!("FINDIT_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base),
            _ => Self::new(window_origin()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `items/3` -> `{base}/api/items/3`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Uploaded image location for an item's `image_path`
    pub fn upload_url(&self, image_path: &str) -> String {
        format!("{}/uploads/{}", self.base_url, image_path.trim_start_matches('/'))
    }
}

fn window_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

static CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Process-wide config, resolved on first use
pub fn config() -> &'static ApiConfig {
    CONFIG.get_or_init(ApiConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        let cfg = ApiConfig::new("http://localhost:5000/");
        assert_eq!(cfg.base_url(), "http://localhost:5000");
        assert_eq!(cfg.api_url("items"), "http://localhost:5000/api/items");
        assert_eq!(cfg.api_url("/items/3/claim"), "http://localhost:5000/api/items/3/claim");
    }

    #[test]
    fn test_upload_url() {
        let cfg = ApiConfig::new("https://findit.example");
        assert_eq!(
            cfg.upload_url("20240301_wallet.png"),
            "https://findit.example/uploads/20240301_wallet.png"
        );
    }

    #[test]
    fn test_query_kept_verbatim() {
        let cfg = ApiConfig::new("http://h");
        assert_eq!(cfg.api_url("notifications?user_id=7"), "http://h/api/notifications?user_id=7");
    }
}
