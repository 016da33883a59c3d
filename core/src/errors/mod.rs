//! Error taxonomy for the bind info lookup.

use thiserror::Error;

/// Maximum number of characters of an upstream body echoed back to the caller
pub const RESPONSE_SNIPPET_LIMIT: usize = 500;

/// Placeholder echoed back when the upstream sent an empty body
pub const EMPTY_BODY_PLACEHOLDER: &str = "No response body";

/// Every way a bind info lookup can fail.
///
/// The `Display` output is the message shown to API callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindInfoError {
    #[error("access_token parameter is required")]
    MissingAccessToken,

    #[error("API returned status code: {status}")]
    UpstreamStatus { status: u16, response_text: String },

    #[error("Request timeout ({seconds} seconds)")]
    Timeout { seconds: u64 },

    #[error("Connection error - cannot reach Garena API")]
    Connection,

    #[error("Request exception: {0}")]
    Request(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl BindInfoError {
    /// Build an `UpstreamStatus` error, keeping at most the first
    /// `RESPONSE_SNIPPET_LIMIT` characters of the body.
    pub fn upstream_status(status: u16, body: &str) -> Self {
        let response_text = if body.is_empty() {
            EMPTY_BODY_PLACEHOLDER.to_string()
        } else {
            body.chars().take(RESPONSE_SNIPPET_LIMIT).collect()
        };
        BindInfoError::UpstreamStatus { status, response_text }
    }

    /// Status code reported by the upstream, when a response was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BindInfoError::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Leading part of the upstream body, when a response was received
    pub fn response_snippet(&self) -> Option<&str> {
        match self {
            BindInfoError::UpstreamStatus { response_text, .. } => Some(response_text),
            _ => None,
        }
    }

    /// True when the caller, not the upstream or the network, is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, BindInfoError::MissingAccessToken) || self.status_code() == Some(400)
    }
}

pub type BindInfoResult<T> = Result<T, BindInfoError>;
