//! # siteharvest
//!
//! Harvests three record collections from one target site and writes each
//! as a JSON array for downstream analysis.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Parser → Extractor → JsonStore
//! ChromeSession ───→ Review extractor ─┘
//! ```
//!
//! | Collection | Access pattern | Stop signal |
//! |---|---|---|
//! | products | static listing pages `?page=N` | first page without cards |
//! | testimonials | API pages behind a bootstrap token | bad status, blank body, or no items |
//! | reviews | headless browser with a load-more control | control disappears |
//!
//! ## Quick Start
//!
//! ```bash
//! siteharvest all
//! siteharvest products --max-pages 3
//! siteharvest reviews --headed
//! ```

/// Error type and the [`Harvester`](app::Harvester) that runs stages in sequence.
pub mod app;

/// Live browser session for the reviews page.
pub mod browser;

/// Command-line interface using clap.
pub mod cli;

/// TOML configuration, loaded from `~/.config/siteharvest/config.toml`.
pub mod config;

/// Record types: [`CatalogItem`](domain::CatalogItem),
/// [`Testimonial`](domain::Testimonial), [`Review`](domain::Review).
pub mod domain;

/// HTTP GET with a fixed identity.
pub mod fetcher;

/// The extraction strategies.
pub mod harvest;

/// Markup selection helpers.
pub mod parser;

/// JSON persistence of record collections.
pub mod store;
