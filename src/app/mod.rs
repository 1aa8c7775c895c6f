pub mod context;
pub mod error;

pub use context::Harvester;
pub use error::{HarvestError, Result};
