use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig as LaunchConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::{HarvestError, Result};
use crate::browser::config::BrowserConfig;
use crate::browser::scripts::DomScripts;
use crate::browser::ReviewPage;
use crate::domain::review::ReviewCard;

/// Headless Chrome session driving the reviews page, using chromiumoxide.
///
/// Owns one browser process for its whole lifetime. [`ReviewPage::close`]
/// shuts it down; dropping an unclosed session still stops the event loop.
pub struct ChromeSession {
    browser: Browser,
    handler: JoinHandle<()>,
    page: Option<Page>,
    config: BrowserConfig,
    scripts: DomScripts,
    closed: bool,
}

impl ChromeSession {
    /// Launch a browser with the given configuration
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let mut builder = LaunchConfig::builder()
            .arg("--no-sandbox")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage");

        if !config.headless {
            builder = builder.with_head();
        }

        let launch_config = builder
            .build()
            .map_err(|e| HarvestError::Browser(format!("Failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(launch_config).await.map_err(|e| {
            HarvestError::Browser(format!(
                "Failed to launch browser: {}. Is Chrome or Chromium installed and in PATH?",
                e
            ))
        })?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler event error: {}", e);
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            page: None,
            config: config.clone(),
            scripts: DomScripts::new(config.clone()),
            closed: false,
        })
    }

    fn page(&self) -> Result<&Page> {
        self.page
            .as_ref()
            .ok_or_else(|| HarvestError::Browser("No page open".to_string()))
    }

    async fn eval<T: DeserializeOwned>(&self, script: String) -> Result<T> {
        self.page()?
            .evaluate(script)
            .await
            .map_err(|e| HarvestError::Browser(format!("Script execution failed: {}", e)))?
            .into_value()
            .map_err(|e| HarvestError::Browser(format!("Failed to parse result: {:?}", e)))
    }
}

#[async_trait]
impl ReviewPage for ChromeSession {
    async fn open(&mut self, url: &str) -> Result<()> {
        let page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| HarvestError::Browser(format!("Failed to create page: {}", e)))?;

        if let Some(ref ua) = self.config.user_agent {
            page.set_user_agent(ua)
                .await
                .map_err(|e| HarvestError::Browser(format!("Failed to set user agent: {}", e)))?;
        }

        page.wait_for_navigation()
            .await
            .map_err(|e| HarvestError::Browser(format!("Navigation failed: {}", e)))?;

        self.page = Some(page);
        Ok(())
    }

    async fn wait_for_reviews(&self, timeout: Duration) -> Result<()> {
        let presence = self.scripts.presence_script();
        let poll = self.config.poll_interval();

        let waited = tokio::time::timeout(timeout, async {
            loop {
                if self.eval::<bool>(presence.clone()).await? {
                    return Ok::<(), HarvestError>(());
                }
                tokio::time::sleep(poll).await;
            }
        })
        .await;

        match waited {
            Ok(result) => result,
            Err(_) => Err(HarvestError::Timeout {
                selector: self.config.review_selector.clone(),
                secs: timeout.as_secs(),
            }),
        }
    }

    async fn query_reviews(&self) -> Result<Vec<ReviewCard>> {
        self.eval(self.scripts.query_script()).await
    }

    async fn load_more(&self) -> Result<bool> {
        self.eval(self.scripts.load_more_script()).await
    }

    async fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        if let Some(page) = self.page.take() {
            if let Err(e) = page.close().await {
                debug!("Failed to close page: {}", e);
            }
        }

        if let Err(e) = self.browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Failed to reap browser process: {}", e);
        }

        self.handler.abort();
    }
}

impl Drop for ChromeSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}
