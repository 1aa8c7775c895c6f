use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the browser-driven review session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Whether to run the browser in headless mode (default: true)
    pub headless: bool,

    /// How long to wait for the first review element in seconds (default: 15)
    pub wait_timeout_secs: u64,

    /// Interval between presence checks while waiting, in milliseconds (default: 250)
    pub poll_interval_ms: u64,

    /// Wait after each "load more" click in milliseconds (default: 1000)
    pub settle_ms: u64,

    /// One match per review element
    pub review_selector: String,

    pub date_selector: String,

    /// Container of the star icons
    pub stars_selector: String,

    /// Icons counted inside the stars container
    pub star_icon_selector: String,

    pub text_selector: String,

    /// Element id of the "load more" control
    pub load_more_id: String,

    /// User agent string to use
    pub user_agent: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            wait_timeout_secs: 15,
            poll_interval_ms: 250,
            settle_ms: 1000,
            review_selector: "div.review".to_string(),
            date_selector: "[data-testid=\"review-date\"]".to_string(),
            stars_selector: "[data-testid=\"review-stars\"]".to_string(),
            star_icon_selector: "svg".to_string(),
            text_selector: "[data-testid=\"review-text\"]".to_string(),
            load_more_id: "page-load-more".to_string(),
            user_agent: None,
        }
    }
}

impl BrowserConfig {
    /// Get the initial wait bound as a Duration
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Get the post-click settle delay as a Duration
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}
