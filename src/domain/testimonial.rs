use serde::{Deserialize, Serialize};

/// Author recorded when the identity badge or its attribute is absent.
pub const ANONYMOUS_AUTHOR: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub author: String,
    /// Number of star icons shown on the testimonial
    pub rating: u32,
    pub text: String,
}

impl Testimonial {
    pub fn new(author: Option<String>, rating: u32, text: Option<String>) -> Self {
        Self {
            author: author.unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string()),
            rating,
            text: text.unwrap_or_default(),
        }
    }
}
