//! Domain layer - Post records and the analysis functions over them

pub mod filter;
pub mod growth;
pub mod hashtags;
pub mod popularity;
pub mod post;

pub use filter::filter_by_hashtag;
pub use growth::find_fastest_growing;
pub use hashtags::{extract_hashtags, hashtag_scores, sort_hashtags_by_popularity};
pub use popularity::sort_by_popularity;
pub use post::Post;
