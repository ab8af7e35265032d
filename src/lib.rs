//! trendle - Post-feed analytics
//!
//! A small library and CLI for analyzing a collection of social-media posts:
//! finding the fastest-growing post by engagement-per-hour, ranking posts by
//! popularity, filtering posts by pattern, and ranking hashtags by summed
//! engagement.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TrendleError;
