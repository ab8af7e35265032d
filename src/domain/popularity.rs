//! Popularity ordering

use crate::domain::Post;

/// Order posts by `engagement_count` descending, ties broken by smaller age
/// (newer first). The sort is stable, so posts equal on both keys keep their
/// input order. Returns a new vector; the input slice is untouched.
pub fn sort_by_popularity(posts: &[Post]) -> Vec<Post> {
    let mut ordered = posts.to_vec();
    ordered.sort_by(|a, b| {
        b.engagement_count
            .cmp(&a.engagement_count)
            .then_with(|| a.age.total_cmp(&b.age))
    });
    ordered
}
