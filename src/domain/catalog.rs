use serde::{Deserialize, Serialize};

/// One product card from the paginated listing.
///
/// Fields hold the raw display text; a missing node leaves its field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    /// Currency text exactly as displayed, e.g. `$4.99`
    pub price: String,
}

impl CatalogItem {
    pub fn new(name: Option<String>, description: Option<String>, price: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            price: price.unwrap_or_default(),
        }
    }
}
