//! Error taxonomy for the shortening workflow.
//!
//! Every failure a caller can observe is one of four mutually exclusive
//! variants. The `Display` output of each variant is the exact string a
//! presentation layer is expected to show, so callers never need to inspect
//! a transport error's shape themselves.

use thiserror::Error;

/// Errors surfaced by URL validation, the TinyURL gateway, and the controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShortenError {
    /// The input was empty or did not parse as an absolute URL.
    #[error("Please enter a valid URL.")]
    Validation,

    /// The request was sent but no response came back.
    #[error("Network Error: you are offline or the server is unreachable.")]
    Network,

    /// The server answered with a non-success status.
    #[error("HTTP Error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Anything else that went wrong while building or processing the request.
    #[error("An error occurred: {0}")]
    Unexpected(String),
}

impl ShortenError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}
