//! Single-attempt retrieval of the raw feed payload.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

/// Transport-level probe fault: a malformed URL, a failed connection, or
/// an HTTP error status from the feed endpoint.
#[derive(Debug, Error)]
#[error("failed to fetch feed from {url}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// Retrieves the feed payload from `url` in a single attempt. Any fault
/// propagates immediately; there is no retry.
///
/// # Errors
///
/// Returns a [`FetchError`] if the URL does not parse, the transport
/// fails, or the endpoint answers with an error status.
pub fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Bytes, FetchError> {
    debug!(url, "fetching feed");

    let resp = client
        .get(url)
        .and_then(|resp| resp.error_for_status())
        .map_err(|source| FetchError {
            url: url.to_string(),
            source,
        })?;

    let body = resp.bytes().map_err(|source| FetchError {
        url: url.to_string(),
        source,
    })?;
    debug!(bytes = body.len(), "feed payload received");

    Ok(body)
}
