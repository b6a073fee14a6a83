//! Domain types for pull-request review feedback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which half of the diff view a review comment line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentSide {
    Left,
    Right,
}

impl CommentSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommentSide::Left => "LEFT",
            CommentSide::Right => "RIGHT",
        }
    }
}

impl fmt::Display for CommentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommentSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LEFT" => Ok(CommentSide::Left),
            "RIGHT" => Ok(CommentSide::Right),
            _ => Err(Error::InvalidData(format!("Unknown comment side: {}", s))),
        }
    }
}

/// Review action submitted with a pull-request review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewEvent {
    Approve,
    Comment,
    RequestChanges,
}

impl ReviewEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewEvent::Approve => "APPROVE",
            ReviewEvent::Comment => "COMMENT",
            ReviewEvent::RequestChanges => "REQUEST_CHANGES",
        }
    }
}

impl fmt::Display for ReviewEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewEvent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "APPROVE" => Ok(ReviewEvent::Approve),
            "COMMENT" => Ok(ReviewEvent::Comment),
            "REQUEST_CHANGES" => Ok(ReviewEvent::RequestChanges),
            _ => Err(Error::InvalidData(format!("Unknown review event: {}", s))),
        }
    }
}

/// An inline comment attached to a file/line of a pull-request diff.
///
/// `start_line` and `start_side` form a multi-line range together with
/// `line`/`side`; they are only sent to GitHub when both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewComment {
    pub commit_id: String,
    pub body: String,
    pub path: String,
    pub line: u32,
    pub side: CommentSide,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_side: Option<CommentSide>,
}

impl ReviewComment {
    /// The multi-line range start, if the comment carries a complete one.
    ///
    /// A lone `start_line` or `start_side` does not count as a range.
    pub fn start_range(&self) -> Option<(u32, CommentSide)> {
        match (self.start_line, self.start_side) {
            (Some(line), Some(side)) => Some((line, side)),
            _ => None,
        }
    }
}

/// An aggregate review action covering an entire pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub commit_id: String,
    pub event: ReviewEvent,
    pub body: String,
}
