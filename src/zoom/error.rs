use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the Zoom API.
///
/// During the poll loop these are folded into `QueryOutcome::QueryError`
/// and never abort the monitor; at startup (user resolution) they are
/// fatal.
#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Zoom API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode Zoom API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to sign API token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("no Zoom user with email {0}")]
    UserNotFound(String),
}
