//! Error taxonomy for the now-playing pipeline.
//!
//! Track-level failures are [`Error`] values and always end up as a well-formed
//! JSON error response. Artist-level failures are [`EnrichError`] values; they
//! are logged by the enricher and never escape it.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the Spotify Web API or shaping its payloads.
#[derive(Debug, Error)]
pub enum Error {
    /// Token exchange returned a non-success status or an unparsable body.
    #[error("token exchange failed: {0}")]
    UpstreamAuth(String),

    /// Transport-level failure (connect, DNS, TLS, timeout, body read).
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// An upstream endpoint answered with an error status.
    #[error("upstream returned {0}")]
    UpstreamStatus(StatusCode),

    /// Upstream body did not have the expected shape.
    #[error("unexpected upstream payload: {0}")]
    Pipeline(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::UpstreamUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Pipeline(err.to_string())
    }
}

/// Why a single artist lookup produced no image.
#[derive(Debug, Error)]
pub enum EnrichError {
    #[error(transparent)]
    Upstream(#[from] Error),

    #[error("artist endpoint returned {0}")]
    Status(StatusCode),

    #[error("malformed artist payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Start-up configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}
