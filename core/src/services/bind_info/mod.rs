//! Bind info lookup
//!
//! The gateway performs the single outbound call; the service classifies
//! the reply and reshapes a successful body into a `BindInfo`.

mod service;
mod traits;


pub use service::BindInfoService;
pub use traits::BindInfoGateway;
