//! Application layer - Use cases over the domain
//!
//! This layer contains:
//! - Ports: repository traits the infrastructure implements
//! - Services: character, weapon and fight use cases

pub mod ports;
pub mod services;
