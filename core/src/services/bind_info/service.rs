//! Bind info service implementation

use bind_shared::utils::mask_token;
use std::sync::Arc;

use crate::domain::BindInfo;
use crate::errors::{BindInfoError, BindInfoResult};

use super::traits::BindInfoGateway;

/// Looks up and reshapes bind info for an access token.
///
/// Holds no mutable state; one instance is shared by all request handlers.
pub struct BindInfoService<G: BindInfoGateway> {
    gateway: Arc<G>,
}

impl<G: BindInfoGateway> BindInfoService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Fetch bind info for `access_token`.
    ///
    /// Exactly one upstream attempt is made. A 200 reply is parsed and
    /// reshaped; any other status becomes `UpstreamStatus` carrying the
    /// leading part of the body. The token is not validated here.
    pub async fn get_bind_info(&self, access_token: &str) -> BindInfoResult<BindInfo> {
        let masked = mask_token(access_token);

        let reply = match self.gateway.fetch(access_token).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(token = %masked, error = %error, "Bind info request failed");
                return Err(error);
            }
        };

        if !reply.is_ok() {
            tracing::warn!(
                token = %masked,
                status = reply.status,
                "Bind info upstream returned non-success status"
            );
            return Err(BindInfoError::upstream_status(reply.status, &reply.body));
        }

        let raw: serde_json::Value = serde_json::from_str(&reply.body).map_err(|e| {
            tracing::error!(token = %masked, error = %e, "Bind info body is not valid JSON");
            BindInfoError::Unexpected(e.to_string())
        })?;

        let info = BindInfo::from_upstream(raw)?;

        tracing::info!(
            token = %masked,
            has_email = !info.current_email.is_empty(),
            has_pending_email = !info.pending_email.is_empty(),
            countdown_seconds = info.countdown_seconds,
            "Bind info fetched"
        );

        Ok(info)
    }
}
