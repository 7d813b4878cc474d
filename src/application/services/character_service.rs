//! Character Service - Application service for character management
//!
//! This service provides use case implementations for creating, updating,
//! and deleting characters, and for teaching them skills from the catalogue.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{CharacterRepositoryPort, SkillRepositoryPort};
use crate::application::services::weapon_service::validate_gear;
use crate::domain::entities::{Character, Skill};
use crate::domain::value_objects::{CharacterId, CombatSettings, RpgClass, SkillId};

const MAX_NAME_LENGTH: usize = 255;

/// Request to create a new character
#[derive(Debug, Clone, Default)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub class: Option<RpgClass>,
    pub strength: Option<i32>,
    pub defence: Option<i32>,
    pub intelligence: Option<i32>,
}

/// Request to update an existing character
#[derive(Debug, Clone, Default)]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    pub class: Option<RpgClass>,
    pub hit_points: Option<i32>,
    pub strength: Option<i32>,
    pub defence: Option<i32>,
    pub intelligence: Option<i32>,
}

/// Character service trait defining the application use cases
#[async_trait]
pub trait CharacterService: Send + Sync {
    /// Create a new character at baseline hit points
    async fn create_character(&self, request: CreateCharacterRequest) -> Result<Character>;

    /// Get a character by ID
    async fn get_character(&self, id: CharacterId) -> Result<Option<Character>>;

    /// List all characters
    async fn list_characters(&self) -> Result<Vec<Character>>;

    /// Update a character
    async fn update_character(
        &self,
        id: CharacterId,
        request: UpdateCharacterRequest,
    ) -> Result<Character>;

    /// Delete a character
    async fn delete_character(&self, id: CharacterId) -> Result<()>;

    /// Teach a character a skill from the catalogue
    async fn add_skill(&self, id: CharacterId, skill_id: SkillId) -> Result<Character>;

    /// List the skill catalogue
    async fn list_skills(&self) -> Result<Vec<Skill>>;

    /// Add a skill to the catalogue
    async fn create_skill(&self, name: &str, damage: i32) -> Result<Skill>;
}

/// Default implementation of CharacterService over the repository ports
pub struct CharacterServiceImpl {
    characters: Arc<dyn CharacterRepositoryPort>,
    skills: Arc<dyn SkillRepositoryPort>,
    settings: CombatSettings,
}

impl CharacterServiceImpl {
    pub fn new(
        characters: Arc<dyn CharacterRepositoryPort>,
        skills: Arc<dyn SkillRepositoryPort>,
        settings: CombatSettings,
    ) -> Self {
        Self {
            characters,
            skills,
            settings,
        }
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            anyhow::bail!("Character name cannot be empty");
        }
        if name.len() > MAX_NAME_LENGTH {
            anyhow::bail!("Character name cannot exceed {} characters", MAX_NAME_LENGTH);
        }
        Ok(())
    }

    fn validate_stats(&self, stats: &[Option<i32>]) -> Result<()> {
        let max = self.settings.max_stat_value;
        for value in stats.iter().flatten() {
            if *value < 0 {
                anyhow::bail!("Character stats cannot be negative");
            }
            if *value > max {
                anyhow::bail!("Character stats cannot exceed {}", max);
            }
        }
        Ok(())
    }

    /// Validate a character creation request
    fn validate_create_request(&self, request: &CreateCharacterRequest) -> Result<()> {
        Self::validate_name(&request.name)?;
        self.validate_stats(&[request.strength, request.defence, request.intelligence])
    }

    /// Validate a character update request
    fn validate_update_request(&self, request: &UpdateCharacterRequest) -> Result<()> {
        if let Some(ref name) = request.name {
            Self::validate_name(name)?;
        }
        self.validate_stats(&[request.strength, request.defence, request.intelligence])
    }

    async fn require(&self, id: CharacterId) -> Result<Character> {
        self.characters
            .get(id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Character not found: {}", id))
    }
}

#[async_trait]
impl CharacterService for CharacterServiceImpl {
    #[instrument(skip(self), fields(name = %request.name))]
    async fn create_character(&self, request: CreateCharacterRequest) -> Result<Character> {
        self.validate_create_request(&request)?;

        let base = self.settings.default_stat;
        let character = Character::new(
            request.name.trim(),
            self.settings.baseline_hit_points,
            base,
        )
        .with_class(request.class.unwrap_or_default())
        .with_stats(
            request.strength.unwrap_or(base),
            request.defence.unwrap_or(base),
            request.intelligence.unwrap_or(base),
        );

        self.characters
            .create(&character)
            .await
            .context("Failed to create character in repository")?;

        info!(
            character_id = %character.id,
            class = %character.class,
            "Created character: {}",
            character.name
        );
        Ok(character)
    }

    #[instrument(skip(self))]
    async fn get_character(&self, id: CharacterId) -> Result<Option<Character>> {
        debug!(character_id = %id, "Fetching character");
        self.characters
            .get(id)
            .await
            .context("Failed to get character from repository")
    }

    #[instrument(skip(self))]
    async fn list_characters(&self) -> Result<Vec<Character>> {
        self.characters
            .list()
            .await
            .context("Failed to list characters from repository")
    }

    #[instrument(skip(self), fields(character_id = %id))]
    async fn update_character(
        &self,
        id: CharacterId,
        request: UpdateCharacterRequest,
    ) -> Result<Character> {
        self.validate_update_request(&request)?;

        let mut character = self.require(id).await?;

        if let Some(name) = request.name {
            character.name = name.trim().to_string();
        }
        if let Some(class) = request.class {
            character.class = class;
        }
        if let Some(hit_points) = request.hit_points {
            character.hit_points = hit_points;
        }
        if let Some(strength) = request.strength {
            character.strength = strength;
        }
        if let Some(defence) = request.defence {
            character.defence = defence;
        }
        if let Some(intelligence) = request.intelligence {
            character.intelligence = intelligence;
        }

        self.characters
            .update_profile(&character)
            .await
            .context("Failed to update character in repository")?;

        info!(character_id = %id, "Updated character: {}", character.name);
        Ok(character)
    }

    #[instrument(skip(self))]
    async fn delete_character(&self, id: CharacterId) -> Result<()> {
        let character = self.require(id).await?;

        self.characters
            .delete(id)
            .await
            .context("Failed to delete character from repository")?;

        info!(character_id = %id, "Deleted character: {}", character.name);
        Ok(())
    }

    #[instrument(skip(self), fields(character_id = %id, skill_id = %skill_id))]
    async fn add_skill(&self, id: CharacterId, skill_id: SkillId) -> Result<Character> {
        let skill = self
            .skills
            .get(skill_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Skill not found: {}", skill_id))?;

        let learned = self
            .characters
            .learn_skill(id, &skill)
            .await
            .context("Failed to add skill to character")?;

        let character = self.require(id).await?;
        if learned {
            debug!(character_id = %id, "{} learned {}", character.name, skill.name);
        }
        Ok(character)
    }

    #[instrument(skip(self))]
    async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.skills
            .list()
            .await
            .context("Failed to list skills from repository")
    }

    #[instrument(skip(self))]
    async fn create_skill(&self, name: &str, damage: i32) -> Result<Skill> {
        validate_gear("Skill", name, damage, &self.settings)?;

        let skill = Skill::new(name.trim(), damage);
        self.skills
            .create(&skill)
            .await
            .context("Failed to add skill to catalogue")?;

        info!(skill_id = %skill.id, "Added skill: {}", skill.name);
        Ok(skill)
    }
}
