use serde::{Deserialize, Serialize};

/// One review from the dynamically rendered reviews page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Display text of the review date, not normalized
    pub date: String,
    pub rating: u32,
    pub text: String,
}

/// Sub-fields read from a live review element.
///
/// `None` means the sub-element was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReviewCard {
    pub date: Option<String>,
    pub stars: Option<u32>,
    pub text: Option<String>,
}

impl ReviewCard {
    /// Build a review only when all three sub-elements were present.
    pub fn into_review(self) -> Option<Review> {
        Some(Review {
            date: self.date?.trim().to_string(),
            rating: self.stars?,
            text: self.text?.trim().to_string(),
        })
    }
}
