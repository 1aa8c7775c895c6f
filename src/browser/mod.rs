//! Live browser access for the dynamically rendered reviews page.
//!
//! # Architecture
//!
//! ```text
//! ChromeSession (ReviewPage) → query / load-more scripts → ReviewCard
//! ```
//!
//! The review extractor only talks to the [`ReviewPage`] trait, so the
//! Chrome-backed session can be swapped for an in-memory page in tests.

mod chrome;
mod config;
mod scripts;

pub use chrome::ChromeSession;
pub use config::BrowserConfig;
pub use scripts::DomScripts;

use std::time::Duration;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::review::ReviewCard;

/// A live document holding review elements.
#[async_trait]
pub trait ReviewPage: Send + Sync {
    /// Navigate to `url`.
    async fn open(&mut self, url: &str) -> Result<()>;

    /// Block until at least one review element exists, failing after `timeout`.
    async fn wait_for_reviews(&self, timeout: Duration) -> Result<()>;

    /// Every review element currently in the document, in document order.
    async fn query_reviews(&self) -> Result<Vec<ReviewCard>>;

    /// Activate the load-more control. Returns `false` if it is gone.
    async fn load_more(&self) -> Result<bool>;

    /// Release the underlying browser. Safe to call more than once.
    async fn close(&mut self);
}
