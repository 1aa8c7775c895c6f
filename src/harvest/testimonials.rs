use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, REFERER};
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::app::{HarvestError, Result};
use crate::config::{SiteConfig, TestimonialConfig};
use crate::domain::Testimonial;
use crate::fetcher::Fetcher;
use crate::harvest::token::LANDING_PATH;
use crate::parser;

/// Compiled selectors for one API response fragment.
pub struct TestimonialParser {
    item: Selector,
    text: Selector,
    author: Selector,
    author_attribute: String,
    star: Selector,
}

impl TestimonialParser {
    pub fn new(config: &TestimonialConfig) -> Result<Self> {
        Ok(Self {
            item: parser::compile(&config.item_selector)?,
            text: parser::compile(&config.text_selector)?,
            author: parser::compile(&config.author_selector)?,
            author_attribute: config.author_attribute.clone(),
            star: parser::compile(&config.star_selector)?,
        })
    }

    pub fn parse_fragment(&self, html: &str) -> Vec<Testimonial> {
        let fragment = Html::parse_fragment(html);

        fragment
            .select(&self.item)
            .map(|item| {
                Testimonial::new(
                    parser::select_attr(item, &self.author, &self.author_attribute),
                    parser::count(item, &self.star),
                    parser::select_text(item, &self.text, ""),
                )
            })
            .collect()
    }
}

/// Why the API loop stopped. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exhausted {
    Status(u16),
    EmptyBody,
    NoItems,
}

/// Pages through the testimonial API with the bootstrap token until it runs dry.
pub struct TestimonialExtractor {
    parser: TestimonialParser,
    headers: HeaderMap,
    page_delay: Duration,
}

impl TestimonialExtractor {
    /// `token` is the value returned by the bootstrap step; it is sent as the
    /// `token_field` header on every API call.
    pub fn new(config: &TestimonialConfig, site: &SiteConfig, token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let name = HeaderName::from_bytes(config.token_field.as_bytes()).map_err(|_| {
            HarvestError::Configuration(format!("invalid header name {}", config.token_field))
        })?;
        let value = HeaderValue::from_str(token).map_err(|_| {
            HarvestError::Configuration(format!("{} is not a valid header value", config.token_field))
        })?;
        headers.insert(name, value);

        let referer = site.endpoint(LANDING_PATH)?;
        let referer = HeaderValue::from_str(referer.as_str())
            .map_err(|_| HarvestError::Configuration(format!("invalid referer {referer}")))?;
        headers.insert(REFERER, referer);

        Ok(Self {
            parser: TestimonialParser::new(config)?,
            headers,
            page_delay: config.page_delay(),
        })
    }

    pub async fn extract(&self, fetcher: &dyn Fetcher, site: &SiteConfig) -> Result<Vec<Testimonial>> {
        let mut testimonials = Vec::new();
        let mut page: u32 = 1;

        let reason = loop {
            let url = site.endpoint(&format!("/api/testimonials?page={page}"))?;
            let result = fetcher.fetch(url.as_str(), self.headers.clone()).await?;

            if !result.is_success() {
                break Exhausted::Status(result.status.as_u16());
            }
            if result.is_blank() {
                break Exhausted::EmptyBody;
            }

            let items = self.parser.parse_fragment(&result.body);
            if items.is_empty() {
                break Exhausted::NoItems;
            }

            info!(page, count = items.len(), "Page {}: {} testimonials", page, items.len());
            testimonials.extend(items);
            page += 1;

            tokio::time::sleep(self.page_delay).await;
        };

        debug!(page, ?reason, "Testimonial API exhausted");
        Ok(testimonials)
    }
}
