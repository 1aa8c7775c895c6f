use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::app::Result;

/// The target site and the identity every request presents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host every endpoint is resolved against
    pub base_url: String,

    /// User agent sent with every HTTP request
    pub user_agent: String,

    /// Per-request ceiling in seconds (default: 30)
    pub request_timeout_secs: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://web-scraping.dev".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl SiteConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve a path such as `/products?page=2` against the base URL.
    pub fn endpoint(&self, path_and_query: &str) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(path_and_query)?)
    }
}

/// Where record collections are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}
