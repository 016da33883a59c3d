//! Bind info value objects and the summary rules

use bind_shared::utils::format_countdown;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{BindInfoError, BindInfoResult};

/// Raw reply from the upstream, whatever its status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Fields read from a successful upstream body.
///
/// Every field is optional upstream; absent or `null` values fall back to
/// `""`, `""` and `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpstreamBindPayload {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_to_be: Option<String>,
    #[serde(default)]
    request_exec_countdown: Option<i64>,
}

impl UpstreamBindPayload {
    /// Currently confirmed recovery email
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    /// Recovery email waiting for confirmation
    pub fn email_to_be(&self) -> &str {
        self.email_to_be.as_deref().unwrap_or_default()
    }

    /// Seconds until the pending change takes effect
    pub fn countdown(&self) -> i64 {
        self.request_exec_countdown.unwrap_or_default()
    }
}

/// Normalized bind info returned to API callers
#[derive(Debug, Clone, PartialEq)]
pub struct BindInfo {
    pub current_email: String,
    pub pending_email: String,
    pub countdown_seconds: i64,
    pub countdown_human: String,
    pub raw_response: Value,
    pub summary: String,
}

impl BindInfo {
    /// Reshape a parsed upstream body.
    ///
    /// The body must be a JSON object; optional fields take their defaults,
    /// fields of the wrong type are rejected as `Unexpected`.
    pub fn from_upstream(raw: Value) -> BindInfoResult<Self> {
        if !raw.is_object() {
            return Err(BindInfoError::Unexpected(format!(
                "expected a JSON object, got {}",
                json_kind(&raw)
            )));
        }

        let payload: UpstreamBindPayload = serde_json::from_value(raw.clone())
            .map_err(|e| BindInfoError::Unexpected(e.to_string()))?;

        let countdown = payload.countdown();
        let countdown_human = if countdown > 0 {
            format_countdown(countdown as u64)
        } else {
            "0".to_string()
        };
        let summary = summarize(payload.email(), payload.email_to_be(), countdown);

        Ok(Self {
            current_email: payload.email().to_string(),
            pending_email: payload.email_to_be().to_string(),
            countdown_seconds: countdown,
            countdown_human,
            raw_response: raw,
            summary,
        })
    }
}

/// One-line description of the binding state.
///
/// First match wins:
/// - pending only: pending address and the formatted countdown
/// - confirmed only: confirmed address
/// - neither: "No recovery email set"
/// - both set: empty
pub fn summarize(email: &str, email_to_be: &str, countdown: i64) -> String {
    match (email.is_empty(), email_to_be.is_empty()) {
        (true, false) => format!(
            "Pending email confirmation: {} - Confirms in: {}",
            email_to_be,
            format_countdown(countdown.max(0) as u64)
        ),
        (false, true) => format!("Email confirmed: {}", email),
        (true, true) => "No recovery email set".to_string(),
        // Upstream reports a confirmed and a pending address at once; left blank.
        (false, false) => String::new(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_pending_only() {
        assert_eq!(
            summarize("", "x@y.com", 3661),
            "Pending email confirmation: x@y.com - Confirms in: 0 Day 1 Hour 1 Min 1 Sec"
        );
    }

    #[test]
    fn test_summary_pending_formats_zero_countdown() {
        assert_eq!(
            summarize("", "x@y.com", 0),
            "Pending email confirmation: x@y.com - Confirms in: 0 Day 0 Hour 0 Min 0 Sec"
        );
    }

    #[test]
    fn test_summary_confirmed_only() {
        assert_eq!(summarize("a@b.com", "", 0), "Email confirmed: a@b.com");
    }

    #[test]
    fn test_summary_no_email() {
        assert_eq!(summarize("", "", 0), "No recovery email set");
    }

    #[test]
    fn test_summary_both_set_is_empty() {
        assert_eq!(summarize("a@b.com", "x@y.com", 120), "");
    }

    #[test]
    fn test_from_upstream_pending() {
        let raw = json!({"email": "", "email_to_be": "x@y.com", "request_exec_countdown": 3661});
        let info = BindInfo::from_upstream(raw.clone()).unwrap();

        assert_eq!(info.current_email, "");
        assert_eq!(info.pending_email, "x@y.com");
        assert_eq!(info.countdown_seconds, 3661);
        assert_eq!(info.countdown_human, "0 Day 1 Hour 1 Min 1 Sec");
        assert_eq!(info.raw_response, raw);
        assert!(info.summary.starts_with("Pending email confirmation: x@y.com"));
    }

    #[test]
    fn test_from_upstream_defaults_missing_fields() {
        let info = BindInfo::from_upstream(json!({"result": 0})).unwrap();

        assert_eq!(info.current_email, "");
        assert_eq!(info.pending_email, "");
        assert_eq!(info.countdown_seconds, 0);
        assert_eq!(info.countdown_human, "0");
        assert_eq!(info.summary, "No recovery email set");
    }

    #[test]
    fn test_from_upstream_null_fields_use_defaults() {
        let raw = json!({"email": "a@b.com", "email_to_be": null, "request_exec_countdown": null});
        let info = BindInfo::from_upstream(raw).unwrap();

        assert_eq!(info.pending_email, "");
        assert_eq!(info.countdown_human, "0");
        assert_eq!(info.summary, "Email confirmed: a@b.com");
    }

    #[test]
    fn test_from_upstream_negative_countdown() {
        let raw = json!({"email": "", "email_to_be": "x@y.com", "request_exec_countdown": -5});
        let info = BindInfo::from_upstream(raw).unwrap();

        assert_eq!(info.countdown_seconds, -5);
        assert_eq!(info.countdown_human, "0");
        assert!(info.summary.ends_with("0 Day 0 Hour 0 Min 0 Sec"));
    }

    #[test]
    fn test_from_upstream_rejects_non_object() {
        let err = BindInfo::from_upstream(json!([1, 2, 3])).unwrap_err();
        assert_eq!(
            err,
            BindInfoError::Unexpected("expected a JSON object, got an array".to_string())
        );
    }

    #[test]
    fn test_from_upstream_rejects_wrong_field_type() {
        let err = BindInfo::from_upstream(json!({"request_exec_countdown": "soon"})).unwrap_err();
        assert!(matches!(err, BindInfoError::Unexpected(_)));
        assert!(err.to_string().starts_with("Unexpected error: "));
    }

    #[test]
    fn test_upstream_reply_status() {
        assert!(UpstreamReply::new(200, "{}").is_ok());
        assert!(!UpstreamReply::new(503, "").is_ok());
    }
}
