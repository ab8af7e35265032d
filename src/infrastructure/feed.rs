//! Feed file loading
//!
//! A feed is a TOML document with `[[posts]]` entries. Each entry carries
//! `author`, `text`, `engagement_count`, and exactly one of `age` (hours) or
//! `posted_at` (RFC 3339 timestamp, converted to an age against a reference
//! instant at load time).

use crate::domain::Post;
use crate::error::{Result, TrendleError};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Deserialize)]
struct RawPost {
    author: String,
    text: String,
    engagement_count: u64,
    age: Option<f64>,
    posted_at: Option<DateTime<Utc>>,
}

impl RawPost {
    fn resolve(self, now: DateTime<Utc>) -> Result<Post> {
        let age = match (self.age, self.posted_at) {
            (Some(age), None) => age,
            (None, Some(posted_at)) => {
                (now - posted_at).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_HOUR
            }
            (Some(_), Some(_)) => {
                return Err(TrendleError::Feed(format!(
                    "entry for {} has both age and posted_at",
                    self.author
                )))
            }
            (None, None) => {
                return Err(TrendleError::Feed(format!(
                    "entry for {} has neither age nor posted_at",
                    self.author
                )))
            }
        };

        // Negated comparison so NaN ages are rejected too; zero stays
        // loadable since only growth-rate computation needs a positive age
        if !(age >= 0.0) {
            return Err(TrendleError::Feed(format!(
                "entry for {} has an invalid age ({age}); ages must be non-negative",
                self.author
            )));
        }

        Ok(Post {
            author: self.author,
            text: self.text,
            age,
            engagement_count: self.engagement_count,
        })
    }
}

#[derive(Debug, Deserialize)]
struct FeedFile {
    #[serde(default)]
    posts: Vec<RawPost>,
}

/// Load a feed file, resolving `posted_at` entries against `now`.
pub fn load_feed_at(path: &Path, now: DateTime<Utc>) -> Result<Vec<Post>> {
    let contents = fs::read_to_string(path)?;
    let feed: FeedFile = toml::from_str(&contents)?;

    feed.posts
        .into_iter()
        .map(|raw| raw.resolve(now))
        .collect()
}

/// Load a feed file using the current time as the reference instant.
pub fn load_feed(path: &Path) -> Result<Vec<Post>> {
    load_feed_at(path, Utc::now())
}
