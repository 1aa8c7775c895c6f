//! Review extraction over a live, incrementally growing document.
//!
//! ```text
//! open → wait for first review → [extract new tail → load more]* → done
//! ```
//!
//! The page never reports a total. Each pass re-queries every review
//! element and a [`ReviewCursor`] keeps how many have already been
//! handled, so only the appended tail is converted. This relies on the
//! page only ever appending reviews.

use tracing::{info, warn};

use crate::app::Result;
use crate::browser::{BrowserConfig, ReviewPage};
use crate::domain::review::ReviewCard;
use crate::domain::Review;

/// Reviews collected from one session.
#[derive(Debug, Default)]
pub struct ReviewHarvest {
    pub reviews: Vec<Review>,
    /// Elements dropped for missing a required sub-element
    pub skipped: usize,
}

/// Number of review elements already handled, emitted or skipped.
#[derive(Debug, Default)]
pub struct ReviewCursor {
    seen: usize,
}

impl ReviewCursor {
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Convert the cards past the cursor and advance it over all of them.
    pub fn take_new(&mut self, cards: Vec<ReviewCard>, harvest: &mut ReviewHarvest) -> usize {
        let before = harvest.reviews.len();
        let mut skipped = 0;

        for card in cards.into_iter().skip(self.seen) {
            self.seen += 1;
            match card.into_review() {
                Some(review) => harvest.reviews.push(review),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "Skipped review elements missing date, stars or text");
            harvest.skipped += skipped;
        }

        harvest.reviews.len() - before
    }
}

/// Drive an opened page until its load-more control disappears.
pub async fn collect_reviews<P>(page: &P, config: &BrowserConfig) -> Result<ReviewHarvest>
where
    P: ReviewPage + ?Sized,
{
    page.wait_for_reviews(config.wait_timeout()).await?;

    let mut harvest = ReviewHarvest::default();
    let mut cursor = ReviewCursor::default();
    let mut batch = 1;

    loop {
        let cards = page.query_reviews().await?;
        let added = cursor.take_new(cards, &mut harvest);
        info!(batch, added, total = harvest.reviews.len(), "Batch {}: {} reviews", batch, added);

        if !page.load_more().await? {
            break;
        }
        batch += 1;
        tokio::time::sleep(config.settle()).await;
    }

    Ok(harvest)
}

/// Open `url`, collect every review, and release the session on every exit path.
pub async fn harvest_reviews<P>(page: &mut P, url: &str, config: &BrowserConfig) -> Result<ReviewHarvest>
where
    P: ReviewPage + ?Sized,
{
    let outcome = match page.open(url).await {
        Ok(()) => collect_reviews(&*page, config).await,
        Err(e) => Err(e),
    };

    page.close().await;
    outcome
}
