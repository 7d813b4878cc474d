//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{Character, Skill, Weapon};
use crate::domain::value_objects::{CharacterId, SkillId};

// =============================================================================
// Character Repository Port
// =============================================================================

/// Repository port for Character operations
///
/// Characters are always returned with their weapon and skills resolved.
#[async_trait]
pub trait CharacterRepositoryPort: Send + Sync {
    /// Create a new character
    async fn create(&self, character: &Character) -> Result<()>;

    /// Get a character by ID
    async fn get(&self, id: CharacterId) -> Result<Option<Character>>;

    /// List all characters, oldest first
    async fn list(&self) -> Result<Vec<Character>>;

    /// Write name, class, hit points and stats; gear and fight record are untouched
    async fn update_profile(&self, character: &Character) -> Result<()>;

    /// Equip a weapon, returning the one it replaced
    async fn equip_weapon(&self, id: CharacterId, weapon: &Weapon) -> Result<Option<Weapon>>;

    /// Teach a skill; returns false when the character already knows it
    async fn learn_skill(&self, id: CharacterId, skill: &Skill) -> Result<bool>;

    /// Write hit points and fight counters for several characters as one commit
    ///
    /// Gear and profile fields in the store are kept, so equips made while a
    /// fight was running survive its write-back.
    async fn record_combat(&self, characters: &[Character]) -> Result<()>;

    /// Delete a character
    async fn delete(&self, id: CharacterId) -> Result<()>;
}

// =============================================================================
// Skill Repository Port
// =============================================================================

/// Repository port for the skill catalogue
#[async_trait]
pub trait SkillRepositoryPort: Send + Sync {
    /// Add a skill to the catalogue
    async fn create(&self, skill: &Skill) -> Result<()>;

    /// Get a skill by ID
    async fn get(&self, id: SkillId) -> Result<Option<Skill>>;

    /// Find a skill by name, ignoring case
    async fn find_by_name(&self, name: &str) -> Result<Option<Skill>>;

    /// List the catalogue
    async fn list(&self) -> Result<Vec<Skill>>;
}
