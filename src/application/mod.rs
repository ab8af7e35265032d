//! Application layer - Use cases and orchestration

pub mod analyze;

pub use analyze::FeedAnalysisService;
