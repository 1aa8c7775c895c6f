//! The three acquisition strategies and their shared vocabulary.
//!
//! - [`catalog`]: bounded listing pages parsed from static markup
//! - [`token`] + [`testimonials`]: token-authenticated API pagination
//! - [`reviews`]: browser-driven load-more extraction
//!
//! Each stage stops on its own "no more data" signal; none of them gets a
//! total count from the site.

pub mod catalog;
pub mod reviews;
pub mod testimonials;
pub mod token;

pub use catalog::{CatalogExtractor, CatalogParser};
pub use reviews::{collect_reviews, harvest_reviews, ReviewCursor, ReviewHarvest};
pub use testimonials::{TestimonialExtractor, TestimonialParser};
pub use token::bootstrap_token;

use std::fmt;
use std::path::PathBuf;

use crate::domain::RecordKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Catalog,
    Testimonials,
    Reviews,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Catalog, Stage::Testimonials, Stage::Reviews];

    pub fn kind(&self) -> RecordKind {
        match self {
            Stage::Catalog => RecordKind::Products,
            Stage::Testimonials => RecordKind::Testimonials,
            Stage::Reviews => RecordKind::Reviews,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Catalog => "catalog",
            Stage::Testimonials => "testimonials",
            Stage::Reviews => "reviews",
        };
        f.write_str(name)
    }
}

/// Outcome of one completed stage.
#[derive(Debug, Clone)]
pub struct StageSummary {
    pub stage: Stage,
    pub count: usize,
    /// Review elements dropped for missing sub-elements
    pub skipped: usize,
    pub path: PathBuf,
}

impl fmt::Display for StageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} saved: {} -> {}",
            self.stage.kind(),
            self.count,
            self.path.display()
        )?;
        if self.skipped > 0 {
            write!(f, " ({} skipped)", self.skipped)?;
        }
        Ok(())
    }
}
