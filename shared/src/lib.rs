//! Shared utilities and common types for the bind info relay
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (environment, server, upstream)
//! - Response status and health payloads
//! - Utility functions (countdown formatting, token masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, Environment, ServerConfig, UpstreamConfig};
pub use types::{HealthResponse, ResponseStatus};
pub use utils::{duration, token};
