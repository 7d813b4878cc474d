//! Arena Engine - Combat resolution for RPG characters
//!
//! The engine resolves single attacks and free-for-all fights between
//! characters and ranks them by their fight record. It is layered as:
//! - `domain`: entities and the pure combat rules
//! - `application`: repository ports and use-case services
//! - `infrastructure`: configuration, in-memory storage and roster seeding

pub mod application;
pub mod domain;
pub mod infrastructure;
