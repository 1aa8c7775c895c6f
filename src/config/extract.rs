use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Selectors and bounds for the paginated product listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Highest listing page index to request (default: 6)
    pub max_pages: u32,

    /// One match per product card
    pub card_selector: String,

    pub name_selector: String,

    pub description_selector: String,

    /// Price selectors, in priority order
    pub price_selectors: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_pages: 6,
            card_selector: "div.row.product".to_string(),
            name_selector: ".col-8.description h3 a".to_string(),
            description_selector: ".col-8.description .short-description".to_string(),
            price_selectors: vec![".col-2.price-wrap".to_string(), ".price".to_string()],
        }
    }
}

/// Token bootstrap and API pagination settings for testimonials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialConfig {
    /// Pause between successful API pages in milliseconds (default: 50)
    pub page_delay_ms: u64,

    /// Element on the landing page whose text is the JSON payload
    pub token_anchor: String,

    /// Key inside the payload holding the secret token; also the header name
    pub token_field: String,

    pub item_selector: String,

    pub text_selector: String,

    /// Identity badge element carrying the author attribute
    pub author_selector: String,

    pub author_attribute: String,

    /// Counted to produce the rating
    pub star_selector: String,
}

impl Default for TestimonialConfig {
    fn default() -> Self {
        Self {
            page_delay_ms: 50,
            token_anchor: "#appData".to_string(),
            token_field: "x-secret-token".to_string(),
            item_selector: "div.testimonial".to_string(),
            text_selector: "p.text".to_string(),
            author_selector: "identicon-svg".to_string(),
            author_attribute: "username".to_string(),
            star_selector: "span.rating svg".to_string(),
        }
    }
}

impl TestimonialConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}
