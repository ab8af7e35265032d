//! Fastest-growing post lookup

use crate::domain::Post;
use crate::error::{Result, TrendleError};

/// Find the post with the highest `engagement_count / age` ratio.
///
/// Every post must have a positive age; the whole slice is validated before
/// any ratio is compared, so a bad age anywhere in the feed fails the call
/// even when that post could not have won. On ties the earliest post in
/// input order wins.
pub fn find_fastest_growing(posts: &[Post]) -> Result<&Post> {
    if posts.is_empty() {
        return Err(TrendleError::EmptyFeed);
    }

    for post in posts {
        // Negated comparison so NaN ages fail validation too
        if !(post.age > 0.0) {
            return Err(TrendleError::NonPositiveAge {
                author: post.author.clone(),
                age: post.age,
            });
        }
    }

    let mut fastest = &posts[0];
    for post in &posts[1..] {
        if post.growth_rate() > fastest.growth_rate() {
            fastest = post;
        }
    }

    Ok(fastest)
}
