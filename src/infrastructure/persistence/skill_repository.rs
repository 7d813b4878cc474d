//! In-memory skill catalogue

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::SkillRepositoryPort;
use crate::domain::entities::Skill;
use crate::domain::value_objects::SkillId;

#[derive(Clone, Default)]
pub struct InMemorySkillRepository {
    skills: Arc<RwLock<Vec<Skill>>>,
}

impl InMemorySkillRepository {
    pub fn new(skills: Arc<RwLock<Vec<Skill>>>) -> Self {
        Self { skills }
    }
}

#[async_trait]
impl SkillRepositoryPort for InMemorySkillRepository {
    async fn create(&self, skill: &Skill) -> Result<()> {
        let mut skills = self.skills.write().await;
        if skills.iter().any(|s| s.id == skill.id || s.name.eq_ignore_ascii_case(&skill.name)) {
            anyhow::bail!("Skill already exists: {}", skill.name);
        }
        skills.push(skill.clone());
        Ok(())
    }

    async fn get(&self, id: SkillId) -> Result<Option<Skill>> {
        Ok(self.skills.read().await.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Skill>> {
        let name = name.trim();
        Ok(self
            .skills
            .read()
            .await
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Skill>> {
        Ok(self.skills.read().await.clone())
    }
}
