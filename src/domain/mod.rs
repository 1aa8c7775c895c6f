pub mod catalog;
pub mod review;
pub mod testimonial;

pub use catalog::CatalogItem;
pub use review::Review;
pub use testimonial::Testimonial;

use std::fmt;

/// The three independent record collections a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Products,
    Testimonials,
    Reviews,
}

impl RecordKind {
    /// File name of the persisted collection
    pub fn file_name(&self) -> &'static str {
        match self {
            RecordKind::Products => "products_data.json",
            RecordKind::Testimonials => "testimonials_data.json",
            RecordKind::Reviews => "reviews_data.json",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Products => "Products",
            RecordKind::Testimonials => "Testimonials",
            RecordKind::Reviews => "Reviews",
        };
        f.write_str(label)
    }
}
