//! Weapon Service - Equips characters with weapons

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, instrument};

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::domain::entities::{Character, Weapon};
use crate::domain::value_objects::{CharacterId, CombatSettings};

/// Request to equip a new weapon
#[derive(Debug, Clone)]
pub struct AddWeaponRequest {
    pub character_id: CharacterId,
    pub name: String,
    pub damage: i32,
}

/// Name and damage checks shared by weapons and catalogue skills
pub(crate) fn validate_gear(
    kind: &str,
    name: &str,
    damage: i32,
    settings: &CombatSettings,
) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("{} name cannot be empty", kind);
    }
    if damage < 0 {
        anyhow::bail!("{} damage cannot be negative", kind);
    }
    if damage > settings.max_damage_value {
        anyhow::bail!(
            "{} damage cannot exceed {}",
            kind,
            settings.max_damage_value
        );
    }
    Ok(())
}

/// Service for weapon management
pub struct WeaponService {
    characters: Arc<dyn CharacterRepositoryPort>,
    settings: CombatSettings,
}

impl WeaponService {
    pub fn new(characters: Arc<dyn CharacterRepositoryPort>, settings: CombatSettings) -> Self {
        Self {
            characters,
            settings,
        }
    }

    fn validate_request(&self, request: &AddWeaponRequest) -> Result<()> {
        validate_gear("Weapon", &request.name, request.damage, &self.settings)
    }

    /// Equip a weapon, replacing whatever the character carried before
    #[instrument(skip(self), fields(character_id = %request.character_id))]
    pub async fn add_weapon(&self, request: AddWeaponRequest) -> Result<Character> {
        self.validate_request(&request)?;

        let weapon = Weapon::new(request.name.trim(), request.damage);
        let replaced = self
            .characters
            .equip_weapon(request.character_id, &weapon)
            .await
            .context("Failed to save weapon for character")?;

        let character = self
            .characters
            .get(request.character_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Character not found: {}", request.character_id))?;

        info!(
            character_id = %character.id,
            replaced = ?replaced.map(|w| w.name),
            "{} equipped {}",
            character.name,
            request.name
        );
        Ok(character)
    }
}
