//! Feed analysis use cases

use crate::domain::{self, Post};
use crate::error::Result;
use crate::infrastructure;
use std::path::Path;

/// Service exposing the four feed analyses over a loaded feed.
pub struct FeedAnalysisService {
    posts: Vec<Post>,
}

impl FeedAnalysisService {
    /// Create a service over an already-loaded feed.
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Load a feed file and build a service over it.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(infrastructure::load_feed(path)?))
    }

    /// The post with the highest engagement-per-hour ratio.
    pub fn fastest_growing(&self) -> Result<&Post> {
        domain::find_fastest_growing(&self.posts)
    }

    /// All posts ordered by popularity.
    pub fn rank_by_popularity(&self) -> Vec<Post> {
        domain::sort_by_popularity(&self.posts)
    }

    /// The posts whose text matches `pattern`, in feed order.
    pub fn filter(&self, pattern: &str) -> Result<Vec<Post>> {
        domain::filter_by_hashtag(&self.posts, pattern)
    }

    /// Scored hashtag ranking across the feed.
    pub fn hashtag_ranking(&self) -> Vec<(String, u64)> {
        domain::hashtag_scores(&self.posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> FeedAnalysisService {
        FeedAnalysisService::new(vec![
            Post::new("@realDonaldTrump", "covfefe #bigsmart", 1249.0, 54303),
            Post::new("@elonmusk", "a solution #bigsmart", 366.4, 166500),
            Post::new("@CIA", "neither confirm nor deny #heart", 2192.0, 284200),
        ])
    }

    #[test]
    fn test_fastest_growing() {
        assert_eq!(service().fastest_growing().unwrap().author, "@elonmusk");
    }

    #[test]
    fn test_rank_by_popularity() {
        let ranked = service().rank_by_popularity();
        assert_eq!(ranked[0].author, "@CIA");
        assert_eq!(ranked[2].author, "@realDonaldTrump");
    }

    #[test]
    fn test_filter() {
        let matched = service().filter("#bigsmart").unwrap();
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_hashtag_ranking() {
        let ranked = service().hashtag_ranking();
        assert_eq!(ranked[0], ("#heart".to_string(), 284200));
        assert_eq!(ranked[1], ("#bigsmart".to_string(), 220803));
    }
}
