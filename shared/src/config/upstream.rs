//! Upstream account-security service configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Garena account-security endpoint returning bind info
pub const DEFAULT_BIND_INFO_URL: &str =
    "https://100067.connect.garena.com/game/account_security/bind:get_bind_info";

/// Application id sent as the `app_id` query parameter
pub const DEFAULT_APP_ID: &str = "100067";

/// User agent of the mobile SDK the upstream expects
pub const DEFAULT_USER_AGENT: &str = "GarenaMSDK/4.0.19P9(Redmi Note 5 ;Android 9;en;US;)";

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Outbound request settings for the bind info lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Full URL of the bind info endpoint
    #[serde(default = "default_url")]
    pub url: String,

    /// Value of the `app_id` query parameter
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            app_id: default_app_id(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    /// Create from environment variables, falling back to the Garena defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("BIND_INFO_UPSTREAM_URL").unwrap_or(defaults.url),
            app_id: env::var("BIND_INFO_APP_ID").unwrap_or(defaults.app_id),
            user_agent: env::var("BIND_INFO_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout_secs: env::var("BIND_INFO_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }

    /// Point the lookup at a different endpoint
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn default_url() -> String {
    DEFAULT_BIND_INFO_URL.to_string()
}

fn default_app_id() -> String {
    DEFAULT_APP_ID.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_garena_client() {
        let config = UpstreamConfig::default();
        assert_eq!(
            config.url,
            "https://100067.connect.garena.com/game/account_security/bind:get_bind_info"
        );
        assert_eq!(config.app_id, "100067");
        assert_eq!(config.user_agent, "GarenaMSDK/4.0.19P9(Redmi Note 5 ;Android 9;en;US;)");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_builders() {
        let config = UpstreamConfig::default()
            .with_url("http://127.0.0.1:9999/bind")
            .with_timeout_secs(2);
        assert_eq!(config.url, "http://127.0.0.1:9999/bind");
        assert_eq!(config.timeout_secs, 2);
        assert_eq!(config.app_id, DEFAULT_APP_ID);
    }
}
