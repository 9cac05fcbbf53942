use url::Url;

use crate::error::ShortenError;

/// Checks that `input` is a well-formed absolute URL.
///
/// A string is accepted iff it parses under standard URL rules and carries
/// an authority (host). There is no scheme or domain allow-listing beyond
/// that.
///
/// # Errors
///
/// Returns [`ShortenError::Validation`] for empty, relative, or otherwise
/// malformed input.
pub fn validate_url(input: &str) -> Result<Url, ShortenError> {
    if input.trim().is_empty() {
        return Err(ShortenError::Validation);
    }

    let url = Url::parse(input).map_err(|_| ShortenError::Validation)?;

    // `Url::parse` accepts authority-less schemes like `mailto:`; the
    // shortening service only makes sense for URLs with a host.
    if !url.has_host() {
        return Err(ShortenError::Validation);
    }

    Ok(url)
}
