//! Gateway trait for the external shortening service.

use crate::domain::entities::ShortenedLink;
use crate::error::ShortenError;
use async_trait::async_trait;

/// Outbound interface to a link-shortening service.
///
/// The controller depends on this trait rather than on a concrete HTTP
/// client so that request issuance and error classification can be tested
/// without a network.
///
/// # Implementations
///
/// - [`crate::infrastructure::TinyUrlGateway`] - TinyURL HTTP implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenGateway: Send + Sync {
    /// Submits one already-validated URL for shortening.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Network`] when no response was received,
    /// [`ShortenError::Api`] when the service answered with a non-success
    /// status, and [`ShortenError::Unexpected`] for any other failure while
    /// building or processing the request.
    async fn shorten(&self, url: &str) -> Result<ShortenedLink, ShortenError>;
}
