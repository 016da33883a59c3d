//! Type definitions module
//!
//! - `response` - Response status and health check payloads

pub mod response;

pub use response::{HealthResponse, ResponseStatus};
