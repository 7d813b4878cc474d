//! Domain services - Pure business logic spanning several entities

pub mod combat;
