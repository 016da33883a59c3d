//! Garena account-security service integration

pub mod bind_info_client;

pub use bind_info_client::GarenaBindInfoGateway;
