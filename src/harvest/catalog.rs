use scraper::{Html, Selector};
use tracing::info;

use crate::app::Result;
use crate::config::{CatalogConfig, SiteConfig};
use crate::domain::CatalogItem;
use crate::fetcher::Fetcher;
use crate::parser;

/// Compiled selectors for a product listing page.
pub struct CatalogParser {
    card: Selector,
    name: Selector,
    description: Selector,
    price: Vec<Selector>,
}

impl CatalogParser {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            card: parser::compile(&config.card_selector)?,
            name: parser::compile(&config.name_selector)?,
            description: parser::compile(&config.description_selector)?,
            price: parser::compile_all(&config.price_selectors)?,
        })
    }

    /// Map every product card on the page to a record, in page order.
    ///
    /// A card with none of its fields still yields an all-empty record.
    pub fn parse_page(&self, html: &str) -> Vec<CatalogItem> {
        let document = Html::parse_document(html);

        document
            .select(&self.card)
            .map(|card| {
                CatalogItem::new(
                    parser::select_text(card, &self.name, ""),
                    parser::select_text(card, &self.description, " "),
                    parser::select_text_any(card, &self.price, ""),
                )
            })
            .collect()
    }
}

/// Walks listing pages `1..=max_pages`, stopping at the first page without cards.
pub struct CatalogExtractor {
    parser: CatalogParser,
    max_pages: u32,
}

impl CatalogExtractor {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            parser: CatalogParser::new(config)?,
            max_pages: config.max_pages,
        })
    }

    pub async fn extract(&self, fetcher: &dyn Fetcher, site: &SiteConfig) -> Result<Vec<CatalogItem>> {
        let mut products = Vec::new();

        for page in 1..=self.max_pages {
            let url = site.endpoint(&format!("/products?page={page}"))?;
            let body = fetcher.fetch_text(url.as_str()).await?;
            let items = self.parser.parse_page(&body);

            info!(page, count = items.len(), "Page {}: {} products", page, items.len());

            if items.is_empty() {
                break;
            }
            products.extend(items);
        }

        Ok(products)
    }
}
