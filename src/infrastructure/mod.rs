//! Infrastructure layer - Feed file I/O

pub mod feed;

pub use feed::{load_feed, load_feed_at};
