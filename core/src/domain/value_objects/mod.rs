//! Value objects
//!
//! Immutable objects built once per lookup and returned to the caller.

pub mod bind_info;

pub use bind_info::{summarize, BindInfo, UpstreamBindPayload, UpstreamReply};
