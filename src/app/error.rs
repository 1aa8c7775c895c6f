use thiserror::Error;

use crate::config::ConfigError;
use crate::harvest::Stage;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid selector `{0}`")]
    Selector(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Timed out after {secs}s waiting for `{selector}`")]
    Timeout { selector: String, secs: u64 },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("{stage} stage failed: {source}")]
    Stage {
        stage: Stage,
        #[source]
        source: Box<HarvestError>,
    },
}

impl HarvestError {
    /// Attach the stage that raised this error.
    pub fn in_stage(self, stage: Stage) -> Self {
        match self {
            already @ HarvestError::Stage { .. } => already,
            other => HarvestError::Stage {
                stage,
                source: Box::new(other),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
