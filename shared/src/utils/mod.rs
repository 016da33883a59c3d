//! Common utility functions

pub mod duration;
pub mod token;

// Re-export commonly used utilities
pub use duration::{format_countdown, CountdownParts};
pub use token::mask_token;
