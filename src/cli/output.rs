//! Output formatting utilities

use crate::domain::Post;

/// Format a list of posts for display, one per line. The result is always
/// newline-terminated.
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found\n".to_string();
    }

    let mut output = String::new();
    for post in posts {
        output.push_str(&format!(
            "{:>8}  {}  {}\n",
            post.engagement_count, post.author, post.text
        ));
    }
    output
}

/// Format the fastest-growing post with its growth rate.
pub fn format_fastest(post: &Post) -> String {
    format!(
        "{}  ({:.1} engagements/hour)\n{}\n",
        post.author,
        post.growth_rate(),
        post.text
    )
}

/// Format a scored hashtag ranking for display. The result is always
/// newline-terminated.
pub fn format_hashtag_list(ranking: &[(String, u64)]) -> String {
    if ranking.is_empty() {
        return "No hashtags found\n".to_string();
    }

    let mut output = String::new();
    for (tag, score) in ranking {
        output.push_str(&format!("{:>8}  {}\n", score, tag));
    }
    output
}
