//! Configuration management for siteharvest.
//!
//! Configuration is read from `~/.config/siteharvest/config.toml` unless a
//! path is given explicitly. If the default file doesn't exist, one with
//! commented defaults is created.

pub mod extract;
pub mod site;

pub use extract::{CatalogConfig, TestimonialConfig};
pub use site::{OutputConfig, SiteConfig};

use crate::browser::BrowserConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub catalog: CatalogConfig,
    pub testimonials: TestimonialConfig,
    pub reviews: BrowserConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from `path`, or from the default path when `None`.
    ///
    /// An explicit path must exist. The default path is created with
    /// commented defaults on first use. Missing fields use default values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default_path = Self::default_config_path()?;
                if !default_path.exists() {
                    Self::create_default_config(&default_path)?;
                    return Ok(Self::default());
                }
                default_path
            }
        };

        Self::from_file(&config_path)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/siteharvest/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("siteharvest").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# siteharvest configuration
#
# Every key is optional; anything left out uses the value shown here.

[site]
base_url = "https://web-scraping.dev"
user_agent = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"
# Ceiling for a single HTTP request, in seconds
request_timeout_secs = 30

[catalog]
# Listing pages are fetched from 1 up to this index, stopping at the first empty page
max_pages = 6
card_selector = "div.row.product"
name_selector = ".col-8.description h3 a"
description_selector = ".col-8.description .short-description"
# Tried in order; the first match wins
price_selectors = [".col-2.price-wrap", ".price"]

[testimonials]
# Pause between API pages (milliseconds)
page_delay_ms = 50
token_anchor = "#appData"
token_field = "x-secret-token"
item_selector = "div.testimonial"
text_selector = "p.text"
author_selector = "identicon-svg"
author_attribute = "username"
star_selector = "span.rating svg"

[reviews]
# Run browser in headless mode (no visible window)
headless = true
# How long to wait for the first review to render (seconds)
wait_timeout_secs = 15
poll_interval_ms = 250
# Wait after each "load more" click (milliseconds)
settle_ms = 1000
review_selector = "div.review"
date_selector = "[data-testid=\"review-date\"]"
stars_selector = "[data-testid=\"review-stars\"]"
# Counted inside the stars container
star_icon_selector = "svg"
text_selector = "[data-testid=\"review-text\"]"
load_more_id = "page-load-more"

[output]
dir = "data"
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
