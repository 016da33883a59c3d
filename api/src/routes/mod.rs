//! Route handlers
//!
//! - `bind_info` - bind info lookup relay
//! - `health` - liveness probe
//! - `home` - HTML documentation page

pub mod bind_info;
pub mod health;
pub mod home;

pub use bind_info::AppState;

/// Service name reported by the health check and the documentation page
pub const SERVICE_NAME: &str = "Garena Bind Info API";

/// API contract version reported by the health check
pub const API_VERSION: &str = "1.0";
