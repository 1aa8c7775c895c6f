use scraper::Html;
use tracing::{debug, info};

use crate::app::{HarvestError, Result};
use crate::config::{SiteConfig, TestimonialConfig};
use crate::fetcher::Fetcher;
use crate::parser;

/// Path of the landing page carrying the token payload.
pub const LANDING_PATH: &str = "/testimonials";

/// Fetch the testimonial landing page and pull the API token out of its
/// embedded JSON payload.
pub async fn bootstrap_token(
    fetcher: &dyn Fetcher,
    site: &SiteConfig,
    config: &TestimonialConfig,
) -> Result<String> {
    let url = site.endpoint(LANDING_PATH)?;
    let body = fetcher.fetch_text(url.as_str()).await?;

    let token = extract_token(&body, &config.token_anchor, &config.token_field)?;
    info!("Found {} on {}", config.token_field, LANDING_PATH);
    debug!(len = token.len(), "token length");

    Ok(token)
}

/// Read the JSON text of the element matching `anchor` and return its `field` string.
pub fn extract_token(html: &str, anchor: &str, field: &str) -> Result<String> {
    let selector = parser::compile(anchor)?;
    let document = Html::parse_document(html);

    let payload = document
        .select(&selector)
        .next()
        .map(|node| node.text().collect::<String>())
        .unwrap_or_default();
    let payload = payload.trim();

    if payload.is_empty() {
        return Err(HarvestError::Configuration(format!(
            "Could not find {anchor} token payload on {LANDING_PATH}"
        )));
    }

    let data: serde_json::Value = serde_json::from_str(payload).map_err(|e| {
        HarvestError::Configuration(format!("{anchor} payload is not valid JSON: {e}"))
    })?;

    match data.get(field).and_then(|v| v.as_str()) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(HarvestError::Configuration(format!(
            "{field} missing in {anchor} JSON"
        ))),
    }
}
