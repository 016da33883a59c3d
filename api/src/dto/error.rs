use bind_core::BindInfoError;
use bind_shared::ResponseStatus;
use serde::{Deserialize, Serialize};

/// Error body shared by every endpoint.
///
/// `status_code` and `response_text` are present only when the upstream
/// actually answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: ResponseStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            status_code: None,
            error: error.into(),
            response_text: None,
        }
    }
}

impl From<&BindInfoError> for ErrorResponse {
    fn from(error: &BindInfoError) -> Self {
        Self {
            status: ResponseStatus::Error,
            status_code: error.status_code(),
            error: error.to_string(),
            response_text: error.response_snippet().map(String::from),
        }
    }
}
