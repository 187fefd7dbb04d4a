// src/source/fetch.rs
// =============================================================================
// This module fetches a web page so it can be graded.
//
// Key functionality:
// - Validates the URL before any network I/O
// - Makes exactly one HTTP GET request, no retries
// - Hands back the response body as a String
//
// Any response with a body counts, even a 404 page: we grade whatever the
// server sent. Only transport failures (DNS, refused connection, timeout,
// TLS) are errors.
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::error::GraderError;

// Sent with every request so server logs show who is asking
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Fetches a web page and returns its HTML content
//
// Parameters:
//   url: the page to fetch (must be an absolute URL)
//   timeout: optional limit for the whole request
//
// Returns: the body text, or the reason the request failed
pub async fn fetch_page(url: &str, timeout: Option<Duration>) -> Result<String, GraderError> {
    let parsed = Url::parse(url).map_err(|source| GraderError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let network_error = |source: reqwest::Error| GraderError::Network {
        url: url.to_string(),
        source,
    };

    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build().map_err(network_error)?;

    info!(%url, "fetching page");
    let response = client.get(parsed).send().await.map_err(network_error)?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, status = status.as_u16(), "server returned a non-success status, grading the body anyway");
    }

    let html = response.text().await.map_err(network_error)?;
    info!(%url, bytes = html.len(), "fetched page");
    Ok(html)
}
