//! Post value record

use serde::{Deserialize, Serialize};

/// One social-media post.
///
/// Immutable value record; the analysis functions take slices of posts and
/// never mutate them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Identifier of the posting account (e.g., "@elonmusk").
    pub author: String,

    /// Free-form content, may embed hashtags like `#bigsmart`.
    pub text: String,

    /// Elapsed hours since the post was made. Must be positive for
    /// growth-rate computation.
    pub age: f64,

    /// Reshare/amplification count.
    pub engagement_count: u64,
}

impl Post {
    pub fn new(author: &str, text: &str, age: f64, engagement_count: u64) -> Self {
        Post {
            author: author.to_string(),
            text: text.to_string(),
            age,
            engagement_count,
        }
    }

    /// Engagement gained per hour of age. Caller must ensure `age > 0`.
    pub fn growth_rate(&self) -> f64 {
        self.engagement_count as f64 / self.age
    }
}
