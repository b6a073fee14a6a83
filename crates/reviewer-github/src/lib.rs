//! GitHub client for posting pull-request review feedback.
//!
//! This crate wraps the two GitHub REST endpoints used to publish review
//! results: creating an inline review comment and creating a review.

mod client;
mod types;

pub use client::GithubClient;

/// Default GitHub API URL.
pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";

/// User-agent sent on every request.
pub const USER_AGENT: &str = "InsightsReviewer/1.0 (reqwest)";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
