//! Outbound access to the user service, used to enrich booking responses.
//!
//! The adapter owns transport details only: URL construction, the request
//! timeout, status handling and JSON decoding into a [`User`].

use crate::domain::model::User;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("cannot build user service URL: {0}")]
    InvalidUrl(String),

    #[error("user service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to get user data: {0}")]
    Status(StatusCode),

    #[error("invalid user payload: {0}")]
    Decode(String),
}

/// Source of user records for the booking query.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fetch_user(&self, email: &str) -> Result<User, EnrichmentError>;
}

/// [`UserDirectory`] backed by the user service's `GET /users/{email}`.
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Builds the adapter with an explicit per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }
}

/// Appends `email` to `base` as a single, percent-encoded path segment.
///
/// A trailing slash on `base` is optional: `http://h/users` and
/// `http://h/users/` both yield `http://h/users/<email>`. The dot segments
/// `.` and `..` are rejected, since they would be dropped or climb the path.
pub fn user_url(base: &Url, email: &str) -> Result<Url, EnrichmentError> {
    if email == "." || email == ".." {
        return Err(EnrichmentError::InvalidUrl(format!("{base} + {email:?}")));
    }
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| EnrichmentError::InvalidUrl(base.to_string()))?;
        segments.pop_if_empty().push(email);
    }
    Ok(url)
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_user(&self, email: &str) -> Result<User, EnrichmentError> {
        let url = user_url(&self.base_url, email)?;
        tracing::debug!(%url, "fetching user from user service");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(EnrichmentError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<User>(&body).map_err(|e| EnrichmentError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn appends_email_with_or_without_trailing_slash() {
        let with = user_url(&base("http://localhost:8081/users/"), "a@x.com").unwrap();
        let without = user_url(&base("http://localhost:8081/users"), "a@x.com").unwrap();
        assert_eq!(with.as_str(), "http://localhost:8081/users/a@x.com");
        assert_eq!(with, without);
    }

    #[test]
    fn escapes_reserved_characters() {
        let url = user_url(&base("http://localhost:8081/users/"), "a/b?c#d e").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8081/users/a%2Fb%3Fc%23d%20e");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn keeps_query_of_base() {
        let url = user_url(&base("http://localhost:8081/users/?v=1"), "a@x.com").unwrap();
        assert_eq!(url.path(), "/users/a@x.com");
        assert_eq!(url.query(), Some("v=1"));
    }

    #[test]
    fn rejects_cannot_be_a_base_url() {
        let err = user_url(&base("mailto:someone@example.com"), "a@x.com").unwrap_err();
        assert!(matches!(err, EnrichmentError::InvalidUrl(_)));
    }

    #[test]
    fn rejects_dot_segments() {
        let users = base("http://localhost:8081/users/");
        for email in [".", ".."] {
            let err = user_url(&users, email).unwrap_err();
            assert!(matches!(err, EnrichmentError::InvalidUrl(_)), "email {email:?}");
        }
        let url = user_url(&users, "...").unwrap();
        assert_eq!(url.path(), "/users/...");
    }

    #[tokio::test]
    async fn unreachable_service_is_a_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let directory = HttpUserDirectory::new(
            base("http://127.0.0.1:9/users/"),
            Duration::from_millis(500),
        )
        .unwrap();
        let err = directory.fetch_user("a@x.com").await.unwrap_err();
        assert!(matches!(err, EnrichmentError::Transport(_)));
    }
}
