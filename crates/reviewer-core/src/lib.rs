//! Core types, error handling, and configuration for insights-reviewer.
//!
//! This crate provides the foundational pieces shared by the GitHub client
//! and the CLI.

pub mod config;
pub mod error;
pub mod types;

pub use config::{Config, GithubConfig};
pub use error::{Error, Result};
pub use types::{CommentSide, Review, ReviewComment, ReviewEvent};
