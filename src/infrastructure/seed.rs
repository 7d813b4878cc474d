//! Roster seeding
//!
//! Populates an empty store from a JSON roster file, or from a small built-in
//! roster when no file is configured. Seeding goes through the application
//! services so the same validation applies as for any other caller.
//!
//! ```json
//! {
//!   "skills": [{ "name": "Smite", "damage": 25 }],
//!   "characters": [
//!     {
//!       "name": "Aladdin",
//!       "class": "Knight",
//!       "strength": 12,
//!       "weapon": { "name": "Scimitar", "damage": 20 },
//!       "skills": ["Frenzy"]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::application::ports::outbound::SkillRepositoryPort;
use crate::application::services::{
    AddWeaponRequest, CharacterService, CreateCharacterRequest,
};
use crate::domain::entities::Character;
use crate::domain::value_objects::RpgClass;
use crate::infrastructure::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// Extra skills added to the catalogue before characters are created
    #[serde(default)]
    pub skills: Vec<SkillSeed>,
    pub characters: Vec<CharacterSeed>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillSeed {
    pub name: String,
    pub damage: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeaponSeed {
    pub name: String,
    pub damage: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterSeed {
    pub name: String,
    #[serde(default)]
    pub class: Option<RpgClass>,
    #[serde(default)]
    pub strength: Option<i32>,
    #[serde(default)]
    pub defence: Option<i32>,
    #[serde(default)]
    pub intelligence: Option<i32>,
    #[serde(default)]
    pub weapon: Option<WeaponSeed>,
    /// Skill names looked up in the catalogue
    #[serde(default)]
    pub skills: Vec<String>,
}

impl RosterFile {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid roster JSON")
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read roster file {}", path.display()))?;
        Self::from_json(&json)
    }

    /// The roster used when no file is configured
    pub fn builtin() -> Self {
        Self {
            skills: Vec::new(),
            characters: vec![
                builtin_character("Aladdin", RpgClass::Knight, "Scimitar", 20, &["Frenzy"]),
                builtin_character("Jafar", RpgClass::Mage, "Serpent Staff", 10, &["Fireball", "Blizzard"]),
                builtin_character("Jasmine", RpgClass::Cleric, "Sling", 15, &["Frenzy", "Fireball"]),
            ],
        }
    }
}

fn builtin_character(
    name: &str,
    class: RpgClass,
    weapon: &str,
    damage: i32,
    skills: &[&str],
) -> CharacterSeed {
    CharacterSeed {
        name: name.to_string(),
        class: Some(class),
        strength: None,
        defence: None,
        intelligence: None,
        weapon: Some(WeaponSeed {
            name: weapon.to_string(),
            damage,
        }),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// Create every skill and character in `roster`; returns the new characters
pub async fn apply_roster(state: &AppState, roster: RosterFile) -> Result<Vec<Character>> {
    for seed in roster.skills {
        state
            .character_service
            .create_skill(&seed.name, seed.damage)
            .await
            .context("Failed to add roster skill")?;
    }

    let skills = state.repository.skills();

    let mut created = Vec::with_capacity(roster.characters.len());
    for seed in roster.characters {
        let mut character = state
            .character_service
            .create_character(CreateCharacterRequest {
                name: seed.name,
                class: seed.class,
                strength: seed.strength,
                defence: seed.defence,
                intelligence: seed.intelligence,
            })
            .await?;

        if let Some(weapon) = seed.weapon {
            character = state
                .weapon_service
                .add_weapon(AddWeaponRequest {
                    character_id: character.id,
                    name: weapon.name,
                    damage: weapon.damage,
                })
                .await?;
        }

        for skill_name in seed.skills {
            match skills.find_by_name(&skill_name).await? {
                Some(skill) => {
                    character = state
                        .character_service
                        .add_skill(character.id, skill.id)
                        .await?;
                }
                None => warn!("Skipping unknown skill '{}' for {}", skill_name, character.name),
            }
        }

        created.push(character);
    }

    info!(characters = created.len(), "Roster seeded");
    Ok(created)
}
