//! # Bind Info Core
//!
//! Core domain layer for the bind info relay.
//! This crate contains the reshaped bind info value objects, the summary
//! rules, the error taxonomy, and the service that turns an upstream reply
//! into a `BindInfo`.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
