//! Error types for trendle

use thiserror::Error;

/// Main error type for the trendle application
#[derive(Debug, Error)]
pub enum TrendleError {
    #[error("Cannot analyze an empty feed")]
    EmptyFeed,

    #[error("Post by {author} has a non-positive age ({age}); growth rate is undefined")]
    NonPositiveAge { author: String, age: f64 },

    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Malformed feed: {0}")]
    Feed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl TrendleError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TrendleError::EmptyFeed => 2,
            TrendleError::NonPositiveAge { .. } => 3,
            TrendleError::Pattern(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TrendleError::EmptyFeed => {
                "Cannot analyze an empty feed\n\n\
                Suggestions:\n\
                • Check that the feed file contains at least one [[posts]] entry\n\
                • Verify you passed the right feed file path"
                    .to_string()
            }
            TrendleError::NonPositiveAge { author, age } => {
                format!(
                    "Post by {} has a non-positive age ({}); growth rate is undefined\n\n\
                    Suggestions:\n\
                    • Ages must be positive (hours since the post was made)\n\
                    • If the entry uses posted_at, the timestamp must lie in the past",
                    author, age
                )
            }
            TrendleError::Pattern(e) => {
                format!(
                    "Invalid filter pattern: {}\n\n\
                    Suggestions:\n\
                    • The pattern is a regular expression fragment\n\
                    • Escape special characters for a literal match (e.g. 'a\\(b\\)')\n\
                    • Hashtag literals like '#bigsmart' need no escaping",
                    e
                )
            }
            TrendleError::Feed(msg) => {
                format!(
                    "Malformed feed: {}\n\n\
                    Each [[posts]] entry needs author, text, engagement_count, and\n\
                    exactly one of: age (hours) or posted_at (RFC 3339 timestamp)",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TrendleError
pub type Result<T> = std::result::Result<T, TrendleError>;
