// src/extract/http.rs
// =============================================================================
// The one HTTP operation every extractor needs: GET a URL and hand back the
// body, but only for a 200 response.
//
// Behavior:
// - One GET, no retries
// - reqwest's default redirect policy, no timeout override
// - Anything other than exactly 200 OK is a failure
//
// The error type keeps the three failure causes apart (transport, status,
// body) even though every caller reacts to them the same way.
// =============================================================================

use std::error::Error as StdError;
use std::fmt;

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};

/// Sent with every request
pub const USER_AGENT: &str = concat!("linkg/", env!("CARGO_PKG_VERSION"));

/// Why a fetch didn't produce a body
#[derive(Debug)]
pub enum FetchError {
    /// Couldn't connect, DNS failure, TLS failure, ...
    Transport { url: String, source: reqwest::Error },
    /// Server answered with something other than 200
    Status { url: String, status: StatusCode },
    /// Connection dropped while reading the body
    Body { url: String, source: reqwest::Error },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. } => url,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { url, .. } => write!(f, "request to {} failed", url),
            FetchError::Status { url, status } => write!(f, "{} returned HTTP {}", url, status),
            FetchError::Body { url, .. } => write!(f, "error reading body of {}", url),
        }
    }
}

impl StdError for FetchError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            FetchError::Transport { source, .. } | FetchError::Body { source, .. } => Some(source),
            FetchError::Status { .. } => None,
        }
    }
}

/// Builds the client for one extractor. Each extractor gets its own.
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")
}

/// GETs `url` and returns the body bytes of a 200 response
pub async fn fetch(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    log::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    log::debug!("{} -> {}", url, status);

    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.bytes().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    log::debug!("read {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}
