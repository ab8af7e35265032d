//! Hashtag extraction and popularity aggregation

use crate::domain::Post;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Regex for matching hashtags: `#` not preceded by a word character,
/// followed by one or more ASCII letters, ending at a non-letter.
fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\B#[a-zA-Z]+\b").unwrap())
}

/// Extract the distinct hashtags from a post's text, in first-occurrence
/// order. Repeats of the same hashtag within one text count once.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for found in hashtag_regex().find_iter(text) {
        let tag = found.as_str().to_string();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

/// Score every distinct hashtag across the feed.
///
/// A hashtag's score is the sum of `engagement_count` over all posts whose
/// deduplicated hashtag set contains it. Aggregation keys on posts, so two
/// posts with identical text each contribute their own count. Ranked by
/// score descending, equal scores by ascending byte order (uppercase letters
/// before lowercase).
pub fn hashtag_scores(posts: &[Post]) -> Vec<(String, u64)> {
    let mut scores: HashMap<String, u64> = HashMap::new();
    for post in posts {
        for tag in extract_hashtags(&post.text) {
            *scores.entry(tag).or_insert(0) += post.engagement_count;
        }
    }

    let mut ranked: Vec<(String, u64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// The hashtag ranking of [`hashtag_scores`], projected to tag names.
pub fn sort_hashtags_by_popularity(posts: &[Post]) -> Vec<String> {
    hashtag_scores(posts)
        .into_iter()
        .map(|(tag, _)| tag)
        .collect()
}
