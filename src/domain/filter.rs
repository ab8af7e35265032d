//! Pattern filtering over post text

use crate::domain::Post;
use crate::error::Result;
use regex::Regex;

/// Keep the posts whose text contains a match for `pattern`, preserving
/// input order.
///
/// The pattern is compiled as a regular expression fragment. `#` is not a
/// regex metacharacter, so hashtag literals like `#bigsmart` work unescaped;
/// callers wanting exact-substring semantics for arbitrary input should
/// escape it first (`regex::escape`).
pub fn filter_by_hashtag(posts: &[Post], pattern: &str) -> Result<Vec<Post>> {
    let regex = Regex::new(pattern)?;

    Ok(posts
        .iter()
        .filter(|post| regex.is_match(&post.text))
        .cloned()
        .collect())
}
