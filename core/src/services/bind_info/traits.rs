//! Trait for the upstream account-security integration

use async_trait::async_trait;

use crate::domain::UpstreamReply;
use crate::errors::BindInfoResult;

/// Outbound access to the account-security bind info endpoint
#[async_trait]
pub trait BindInfoGateway: Send + Sync {
    /// Issue one lookup for `access_token`.
    ///
    /// Any received response is `Ok`, whatever its status. Transport
    /// failures map to `Timeout`, `Connection` or `Request`.
    async fn fetch(&self, access_token: &str) -> BindInfoResult<UpstreamReply>;
}
