pub mod http_fetcher;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::app::{HarvestError, Result};

pub use http_fetcher::HttpFetcher;

/// A completed HTTP exchange, successful or not.
#[derive(Debug)]
pub struct FetchResult {
    pub status: StatusCode,
    pub body: String,
}

impl FetchResult {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// True when the body has no visible content.
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `url` with extra headers, returning whatever status the server sent.
    async fn fetch(&self, url: &str, headers: HeaderMap) -> Result<FetchResult>;

    /// GET `url` and return the body, treating any non-2xx status as an error.
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let result = self.fetch(url, HeaderMap::new()).await?;

        if !result.is_success() {
            return Err(HarvestError::HttpStatus {
                url: url.to_string(),
                status: result.status.as_u16(),
            });
        }

        Ok(result.body)
    }
}
