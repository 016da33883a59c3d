//! # Infrastructure Layer
//!
//! Concrete implementations of the core traits that talk to the outside
//! world.
//!
//! ## Architecture
//!
//! - **Garena**: `reqwest` gateway for the account-security bind info
//!   endpoint, implementing `bind_core::BindInfoGateway`

// Re-export core types for convenience
pub use bind_core::errors::*;

/// Garena account-security integration
pub mod garena;

pub use garena::GarenaBindInfoGateway;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
