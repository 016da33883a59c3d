use bind_core::BindInfo;
use bind_shared::ResponseStatus;
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /bind_info`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindInfoQuery {
    /// First `access_token` value, if non-empty
    pub access_token: Option<String>,
}

impl BindInfoQuery {
    /// Parse a raw query string.
    ///
    /// The first `access_token` pair wins; an empty value or an unparseable
    /// query string counts as missing.
    pub fn parse(query_string: &str) -> Self {
        let pairs = query_pairs(query_string).unwrap_or_default();

        let access_token = pairs
            .into_iter()
            .find(|(key, _)| key == "access_token")
            .map(|(_, value)| value)
            .filter(|value| !value.is_empty());

        Self { access_token }
    }
}

fn query_pairs(query_string: &str) -> Option<Vec<(String, String)>> {
    actix_web::web::Query::<Vec<(String, String)>>::from_query(query_string)
        .ok()
        .map(|query| query.into_inner())
}

/// `data` object of a successful lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindInfoData {
    pub current_email: String,
    pub pending_email: String,
    pub countdown_seconds: i64,
    pub countdown_human: String,
    pub raw_response: serde_json::Value,
}

impl From<&BindInfo> for BindInfoData {
    fn from(info: &BindInfo) -> Self {
        Self {
            current_email: info.current_email.clone(),
            pending_email: info.pending_email.clone(),
            countdown_seconds: info.countdown_seconds,
            countdown_human: info.countdown_human.clone(),
            raw_response: info.raw_response.clone(),
        }
    }
}

/// Body of a successful `GET /bind_info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindInfoResponse {
    pub status: ResponseStatus,
    pub status_code: u16,
    pub data: BindInfoData,
    pub summary: String,
}

impl From<BindInfo> for BindInfoResponse {
    fn from(info: BindInfo) -> Self {
        Self {
            status: ResponseStatus::Success,
            status_code: 200,
            data: BindInfoData::from(&info),
            summary: info.summary,
        }
    }
}
