use serde::Serialize;

/// The outcome of one successful shortening request.
///
/// Created once per success, never mutated afterwards; the controller
/// replaces it wholesale on the next successful request and clears it on
/// input change or reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedLink {
    /// The URL exactly as the caller submitted it.
    pub original_url: String,
    /// The shortened URL returned by the service.
    pub short_url: String,
}

impl ShortenedLink {
    pub fn new(original_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_url: short_url.into(),
        }
    }
}
