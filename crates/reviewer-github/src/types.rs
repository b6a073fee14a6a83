//! GitHub API request types.
//!
//! These are the raw JSON bodies sent to the GitHub REST API, built from the
//! domain types in `reviewer-core`.

use reviewer_core::{CommentSide, ReviewComment, ReviewEvent};
use serde::Serialize;

/// Body for `POST /repos/{full_name}/pulls/{number}/comments`.
#[derive(Serialize)]
pub(crate) struct CreateReviewCommentRequest<'a> {
    pub body: &'a str,
    pub commit_id: &'a str,
    pub path: &'a str,
    pub line: u32,
    pub side: CommentSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_side: Option<CommentSide>,
}

impl<'a> CreateReviewCommentRequest<'a> {
    /// Build the wire body for a review comment.
    ///
    /// The start fields are carried only when the comment holds a complete
    /// multi-line range; a lone `start_line` or `start_side` is dropped.
    pub fn from_comment(comment: &'a ReviewComment) -> Self {
        let (start_line, start_side) = match comment.start_range() {
            Some((line, side)) => (Some(line), Some(side)),
            None => (None, None),
        };

        Self {
            body: &comment.body,
            commit_id: &comment.commit_id,
            path: &comment.path,
            line: comment.line,
            side: comment.side,
            start_line,
            start_side,
        }
    }
}

/// Body for `POST /repos/{full_name}/pulls/{number}/reviews`.
#[derive(Serialize)]
pub(crate) struct CreateReviewRequest<'a> {
    pub commit_id: &'a str,
    pub event: ReviewEvent,
    pub body: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_comment() -> ReviewComment {
        ReviewComment {
            commit_id: "abc123".to_string(),
            body: "nit: rename var".to_string(),
            path: "src/a.php".to_string(),
            line: 10,
            side: CommentSide::Right,
            start_line: None,
            start_side: None,
        }
    }

    #[test]
    fn test_comment_body_has_exactly_required_fields() {
        let comment = sample_comment();
        let value =
            serde_json::to_value(CreateReviewCommentRequest::from_comment(&comment)).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert_eq!(obj["body"], "nit: rename var");
        assert_eq!(obj["commit_id"], "abc123");
        assert_eq!(obj["path"], "src/a.php");
        assert_eq!(obj["line"], 10);
        assert_eq!(obj["side"], "RIGHT");
    }

    #[test]
    fn test_comment_body_with_range() {
        let mut comment = sample_comment();
        comment.start_line = Some(5);
        comment.start_side = Some(CommentSide::Left);

        let value =
            serde_json::to_value(CreateReviewCommentRequest::from_comment(&comment)).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 7);
        assert_eq!(obj["start_line"], 5);
        assert_eq!(obj["start_side"], "LEFT");
    }

    #[test]
    fn test_lone_start_line_is_dropped() {
        let mut comment = sample_comment();
        comment.start_line = Some(5);

        let value =
            serde_json::to_value(CreateReviewCommentRequest::from_comment(&comment)).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert!(!obj.contains_key("start_line"));
        assert!(!obj.contains_key("start_side"));
    }

    #[test]
    fn test_lone_start_side_is_dropped() {
        let mut comment = sample_comment();
        comment.start_side = Some(CommentSide::Left);

        let value =
            serde_json::to_value(CreateReviewCommentRequest::from_comment(&comment)).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 5);
        assert!(!obj.contains_key("start_line"));
        assert!(!obj.contains_key("start_side"));
    }

    #[test]
    fn test_review_body_fields() {
        let request = CreateReviewRequest {
            commit_id: "abc123",
            event: ReviewEvent::Approve,
            body: "LGTM",
        };

        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["commit_id"], "abc123");
        assert_eq!(obj["event"], "APPROVE");
        assert_eq!(obj["body"], "LGTM");
    }
}
