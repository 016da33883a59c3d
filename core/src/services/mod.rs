//! Domain services

pub mod bind_info;

pub use bind_info::{BindInfoGateway, BindInfoService};
