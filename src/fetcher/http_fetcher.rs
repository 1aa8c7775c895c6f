use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use tracing::debug;

use crate::app::Result;
use crate::config::SiteConfig;
use crate::fetcher::{FetchResult, Fetcher};

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(site: &SiteConfig) -> Result<Self> {
        Self::with_identity(&site.user_agent, site.request_timeout())
    }

    pub fn with_identity(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, headers: HeaderMap) -> Result<FetchResult> {
        debug!(%url, "GET");

        let response = self.client.get(url).headers(headers).send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(FetchResult { status, body })
    }
}
