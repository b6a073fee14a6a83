//! GitHub API client implementation.

use std::time::Duration;

use reqwest::StatusCode;
use reviewer_core::{Error, Result, Review, ReviewComment};
use tracing::{debug, warn};

use crate::types::{CreateReviewCommentRequest, CreateReviewRequest};
use crate::{DEFAULT_GITHUB_URL, DEFAULT_TIMEOUT_SECS, USER_AGENT};

/// GitHub API client.
///
/// Configuration is immutable after construction; the client can be shared
/// freely across concurrent calls.
pub struct GithubClient {
    base_url: String,
    token: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl GithubClient {
    /// Create a new GitHub client against the public API.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_GITHUB_URL, token)
    }

    /// Create a new GitHub client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a review comment on a pull request.
    ///
    /// GitHub answers `201 Created` on success; anything else is an error.
    /// See <https://docs.github.com/en/rest/pulls/comments#create-a-review-comment-for-a-pull-request>
    pub async fn create_pull_request_review_comment(
        &self,
        full_repository_name: &str,
        pull_request_number: u64,
        comment: &ReviewComment,
    ) -> Result<()> {
        let path = format!(
            "repos/{}/pulls/{}/comments",
            full_repository_name, pull_request_number
        );
        let request = CreateReviewCommentRequest::from_comment(comment);

        self.post(&path, &request, StatusCode::CREATED).await
    }

    /// Create a review on a pull request.
    ///
    /// See <https://docs.github.com/en/rest/pulls/reviews#create-a-review-for-a-pull-request>
    pub async fn create_pull_request_review(
        &self,
        full_repository_name: &str,
        pull_request_number: u64,
        review: &Review,
    ) -> Result<()> {
        let path = format!(
            "repos/{}/pulls/{}/reviews",
            full_repository_name, pull_request_number
        );
        let request = CreateReviewRequest {
            commit_id: &review.commit_id,
            event: review.event,
            body: &review.body,
        };

        self.post(&path, &request, StatusCode::OK).await
    }

    /// Make an authenticated POST request and check the response status.
    ///
    /// The observed status must equal `expected` exactly; any other status
    /// surfaces as `Error::Api` carrying the verbatim response body.
    async fn post<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        expected: StatusCode,
    ) -> Result<()> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = url.as_str(), "GitHub POST request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if status != expected {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(
                status = status_code,
                message = message.as_str(),
                "GitHub API error response"
            );
            return Err(Error::Api {
                status: status_code,
                message,
            });
        }

        Ok(())
    }
}
