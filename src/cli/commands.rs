//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "trendle")]
#[command(about = "Post-feed analytics: growth, popularity, and hashtag rankings", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the fastest-growing post (highest engagement per hour)
    Fastest {
        /// Feed file to analyze
        feed: PathBuf,
    },

    /// List all posts ordered by popularity
    Rank {
        /// Feed file to analyze
        feed: PathBuf,
    },

    /// List the posts whose text matches a pattern
    Filter {
        /// Feed file to analyze
        feed: PathBuf,

        /// Pattern to match (regular expression fragment, e.g. '#bigsmart')
        pattern: String,
    },

    /// Rank hashtags by summed engagement across the feed
    Hashtags {
        /// Feed file to analyze
        feed: PathBuf,
    },
}
