use std::sync::Arc;

use tracing::{error, info};

use crate::app::error::Result;
use crate::browser::{ChromeSession, ReviewPage};
use crate::config::Config;
use crate::domain::RecordKind;
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::harvest::{
    bootstrap_token, harvest_reviews, CatalogExtractor, Stage, StageSummary, TestimonialExtractor,
};
use crate::store::JsonStore;

/// Wires configuration, the HTTP fetcher and the record store together and
/// runs the stages one after another.
pub struct Harvester {
    pub config: Config,
    pub fetcher: Arc<dyn Fetcher>,
    pub store: JsonStore,
}

impl Harvester {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher> = Arc::new(HttpFetcher::new(&config.site)?);
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
        let store = JsonStore::new(config.output.dir.clone());
        Self {
            config,
            fetcher,
            store,
        }
    }

    /// Run `stages` in order. Each stage writes its file before the next
    /// starts; the first failure aborts the rest.
    pub async fn run(&self, stages: &[Stage]) -> Result<Vec<StageSummary>> {
        let mut summaries = Vec::with_capacity(stages.len());

        for &stage in stages {
            info!(%stage, "Starting stage");
            let summary = match stage {
                Stage::Catalog => self.run_catalog().await,
                Stage::Testimonials => self.run_testimonials().await,
                Stage::Reviews => self.run_reviews().await,
            };

            match summary {
                Ok(summary) => {
                    info!(%stage, count = summary.count, "Stage complete");
                    summaries.push(summary);
                }
                Err(e) => {
                    error!(%stage, "Stage failed: {}", e);
                    return Err(e.in_stage(stage));
                }
            }
        }

        Ok(summaries)
    }

    pub async fn run_catalog(&self) -> Result<StageSummary> {
        let extractor = CatalogExtractor::new(&self.config.catalog)?;
        let products = extractor
            .extract(self.fetcher.as_ref(), &self.config.site)
            .await?;

        let path = self.store.write(RecordKind::Products, &products)?;
        Ok(StageSummary {
            stage: Stage::Catalog,
            count: products.len(),
            skipped: 0,
            path,
        })
    }

    pub async fn run_testimonials(&self) -> Result<StageSummary> {
        let site = &self.config.site;
        let settings = &self.config.testimonials;

        let token = bootstrap_token(self.fetcher.as_ref(), site, settings).await?;
        let extractor = TestimonialExtractor::new(settings, site, &token)?;
        let testimonials = extractor.extract(self.fetcher.as_ref(), site).await?;

        let path = self.store.write(RecordKind::Testimonials, &testimonials)?;
        Ok(StageSummary {
            stage: Stage::Testimonials,
            count: testimonials.len(),
            skipped: 0,
            path,
        })
    }

    pub async fn run_reviews(&self) -> Result<StageSummary> {
        let mut session = ChromeSession::launch(&self.config.reviews).await?;
        self.run_reviews_with(&mut session).await
    }

    /// Review stage against an already launched page. The page is closed
    /// before this returns.
    pub async fn run_reviews_with<P>(&self, page: &mut P) -> Result<StageSummary>
    where
        P: ReviewPage + ?Sized,
    {
        let url = match self.config.site.endpoint("/reviews") {
            Ok(url) => url,
            Err(e) => {
                page.close().await;
                return Err(e);
            }
        };
        let harvest = harvest_reviews(page, url.as_str(), &self.config.reviews).await?;

        let path = self.store.write(RecordKind::Reviews, &harvest.reviews)?;
        Ok(StageSummary {
            stage: Stage::Reviews,
            count: harvest.reviews.len(),
            skipped: harvest.skipped,
            path,
        })
    }
}
