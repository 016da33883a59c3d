//! Domain layer: value objects describing an account's recovery email binding

pub mod value_objects;

pub use value_objects::*;
