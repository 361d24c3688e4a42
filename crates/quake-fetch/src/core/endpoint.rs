use tracing::error;
use url::Url;

use crate::LOG_TAG;
use crate::error::{Error, Result};

/// Parse `input` as an absolute HTTP(S) URL.
///
/// Returns `None` and logs a diagnostic when the text is not a URL or names
/// another scheme. Later stages treat `None` as "no data available".
///
/// # Examples
///
/// ```
/// use quake_fetch::build_url;
///
/// assert!(build_url("https://example.com/feed.json").is_some());
/// assert!(build_url("not a url").is_none());
/// ```
pub fn build_url(input: &str) -> Option<Url> {
    match parse_url(input) {
        Ok(url) => Some(url),
        Err(e) => {
            error!(target: LOG_TAG, input, error = %e, "problem building the URL");
            None
        }
    }
}

pub(crate) fn parse_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|source| Error::MalformedUrl {
        input: input.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
