//! In-memory persistence adapters
//!
//! The engine itself never persists anything; these adapters give the
//! services and the demo binary a store that satisfies the repository ports.

mod character_repository;
mod skill_repository;

pub use character_repository::InMemoryCharacterRepository;
pub use skill_repository::InMemorySkillRepository;

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::application::ports::outbound::SkillRepositoryPort;
use crate::domain::entities::{default_skills, Character, Skill};

/// Combined repository providing access to all domain repositories
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    characters: Arc<RwLock<Vec<Character>>>,
    skills: Arc<RwLock<Vec<Skill>>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose skill catalogue holds the default skills
    pub async fn with_default_skills() -> Result<Self> {
        let repository = Self::new();
        let skills = repository.skills();
        for skill in default_skills() {
            skills.create(&skill).await?;
        }
        Ok(repository)
    }

    pub fn characters(&self) -> InMemoryCharacterRepository {
        InMemoryCharacterRepository::new(self.characters.clone())
    }

    pub fn skills(&self) -> InMemorySkillRepository {
        InMemorySkillRepository::new(self.skills.clone())
    }
}
