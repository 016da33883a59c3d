pub mod bind_info;
pub mod error;

pub use bind_info::{BindInfoData, BindInfoQuery, BindInfoResponse};
pub use error::ErrorResponse;
