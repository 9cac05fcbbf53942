//! HTTP gateway for the TinyURL creation API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::entities::ShortenedLink;
use crate::domain::gateway::ShortenGateway;
use crate::error::ShortenError;

/// Default API base when none is configured.
pub const DEFAULT_API_BASE: &str = "https://api.tinyurl.com";

/// [`ShortenGateway`] implementation backed by `POST {base}/create`.
///
/// Each request carries the bearer credential and a JSON body
/// `{"url": "<submitted URL>"}`. No explicit timeout is set; requests are
/// bounded only by the transport's own defaults.
pub struct TinyUrlGateway {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

#[derive(Serialize)]
struct CreateRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    data: CreateData,
}

#[derive(Debug, Deserialize)]
struct CreateData {
    tiny_url: String,
}

/// Error body shape: `{ "data": { "message": "..." } }`. All fields are
/// optional so a partial or foreign body still classifies as an API error.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    data: Option<ApiErrorData>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorData {
    #[serde(default)]
    message: Option<String>,
}

impl TinyUrlGateway {
    /// Creates a gateway against the default TinyURL API base.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_base(api_key, DEFAULT_API_BASE)
    }

    /// Creates a gateway against a custom API base (used by tests and
    /// self-hosted proxies).
    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }

    /// Creates a gateway from loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self::with_api_base(&config.api_key, &config.api_base)
    }

    fn create_endpoint(&self) -> String {
        format!("{}/create", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl ShortenGateway for TinyUrlGateway {
    async fn shorten(&self, url: &str) -> Result<ShortenedLink, ShortenError> {
        let endpoint = self.create_endpoint();
        tracing::debug!(%endpoint, "issuing shorten request");

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .json(&CreateRequest { url })
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.data.and_then(|data| data.message))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            tracing::warn!(status = status.as_u16(), %message, "service rejected request");
            return Err(ShortenError::api(status.as_u16(), message));
        }

        let body: CreateResponse = response
            .json()
            .await
            .map_err(|err| ShortenError::unexpected(err.to_string()))?;

        Ok(ShortenedLink::new(url, body.data.tiny_url))
    }
}

/// Classifies a failure out of `send()`, before any status is available.
///
/// Anything that means "no response came back" is a connectivity error; a
/// failure to build the request in the first place is unexpected.
fn classify_send_error(err: reqwest::Error) -> ShortenError {
    if err.is_builder() {
        return ShortenError::unexpected(err.to_string());
    }
    if err.is_connect() || err.is_timeout() || err.status().is_none() {
        tracing::warn!(error = %err, "transport failure, no response received");
        return ShortenError::Network;
    }
    ShortenError::unexpected(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body_parses_nested_tiny_url() {
        let body: CreateResponse = serde_json::from_str(
            r#"{"data":{"tiny_url":"https://tiny.one/abc","url":"https://example.com"},"code":0}"#,
        )
        .unwrap();
        assert_eq!(body.data.tiny_url, "https://tiny.one/abc");
    }

    #[test]
    fn test_error_body_parses_nested_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"status":400,"data":{"message":"Bad request"}}"#).unwrap();
        assert_eq!(body.data.unwrap().message.as_deref(), Some("Bad request"));
    }

    #[test]
    fn test_error_body_tolerates_missing_fields() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"status":500}"#).unwrap();
        assert!(body.data.is_none());

        let body: ApiErrorBody = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert_eq!(body.data.unwrap().message, None);
    }

    #[test]
    fn test_create_endpoint_joins_base_without_double_slash() {
        let gateway = TinyUrlGateway::with_api_base("key", "https://api.tinyurl.com/");
        assert_eq!(gateway.create_endpoint(), "https://api.tinyurl.com/create");

        let gateway = TinyUrlGateway::with_api_base("key", "https://api.tinyurl.com");
        assert_eq!(gateway.create_endpoint(), "https://api.tinyurl.com/create");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(CreateRequest {
            url: "https://example.com",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"url": "https://example.com"}));
    }
}
