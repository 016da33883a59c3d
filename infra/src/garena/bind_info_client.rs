//! Garena bind info gateway
//!
//! Issues the single `GET bind:get_bind_info` call the relay forwards to.
//!
//! ## Behaviour
//!
//! - Query parameters `app_id` and `access_token`
//! - Mobile SDK `User-Agent`, `Connection: Keep-Alive`, `Accept-Encoding: gzip`
//!   (gzip bodies are decompressed transparently)
//! - One attempt bounded by the configured timeout, no retries
//! - Security: the access token is masked in logs

use async_trait::async_trait;
use bind_core::{BindInfoError, BindInfoGateway, BindInfoResult, UpstreamReply};
use bind_shared::{utils::mask_token, UpstreamConfig};
use reqwest::header::{HeaderMap, HeaderValue, CONNECTION};
use std::time::Duration;
use tracing::{debug, info};

use crate::InfrastructureError;

/// `reqwest`-backed implementation of `BindInfoGateway`
pub struct GarenaBindInfoGateway {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl GarenaBindInfoGateway {
    /// Build the gateway and its pooled HTTP client
    pub fn new(config: UpstreamConfig) -> Result<Self, InfrastructureError> {
        if config.url.is_empty() {
            return Err(InfrastructureError::Config(
                "bind info upstream URL must not be empty".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONNECTION, HeaderValue::from_static("Keep-Alive"));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .gzip(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        info!(
            url = %config.url,
            app_id = %config.app_id,
            timeout_secs = config.timeout_secs,
            "Garena bind info gateway initialized"
        );

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    fn classify(&self, error: reqwest::Error) -> BindInfoError {
        classify_transport_error(error, self.config.timeout_secs)
    }
}

/// Map a transport failure onto the lookup error taxonomy.
/// Timeouts win over connection errors, matching connect timeouts.
fn classify_transport_error(error: reqwest::Error, timeout_secs: u64) -> BindInfoError {
    if error.is_timeout() {
        BindInfoError::Timeout {
            seconds: timeout_secs,
        }
    } else if error.is_connect() {
        BindInfoError::Connection
    } else {
        BindInfoError::Request(error.to_string())
    }
}

#[async_trait]
impl BindInfoGateway for GarenaBindInfoGateway {
    async fn fetch(&self, access_token: &str) -> BindInfoResult<UpstreamReply> {
        debug!(token = %mask_token(access_token), "Requesting Garena bind info");

        let response = self
            .client
            .get(&self.config.url)
            .query(&[
                ("app_id", self.config.app_id.as_str()),
                ("access_token", access_token),
            ])
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        debug!(status, body_len = body.len(), "Garena bind info response received");

        Ok(UpstreamReply::new(status, body))
    }
}
