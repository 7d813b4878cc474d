//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Character, Weapon, Skill
//! - Value Objects: typed ids, character classes, combat settings
//! - Domain Services: combat resolution and ranking

pub mod entities;
pub mod services;
pub mod value_objects;
