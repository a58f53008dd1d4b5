//! Typed SMTP configuration accessors resolved from a generic property
//! store, with fixed fallbacks for absent keys.

pub mod constants;
pub mod properties;
pub mod service;

pub use properties::{EnvPropertyStore, InMemoryPropertyStore, PropertyStore, PropertyValue};
pub use service::options::{EmailOptions, EmailOptionsImpl};
