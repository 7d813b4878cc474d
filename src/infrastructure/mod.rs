//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: in-memory adapters for the repository ports
//! - Config: Application configuration
//! - Seed: Roster loading
//! - State: Shared application state

pub mod config;
pub mod persistence;
pub mod seed;
pub mod state;
