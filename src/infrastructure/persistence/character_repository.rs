//! In-memory character repository

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::domain::entities::{Character, Skill, Weapon};
use crate::domain::value_objects::CharacterId;

/// Character store kept in insertion order
#[derive(Clone, Default)]
pub struct InMemoryCharacterRepository {
    characters: Arc<RwLock<Vec<Character>>>,
}

impl InMemoryCharacterRepository {
    pub fn new(characters: Arc<RwLock<Vec<Character>>>) -> Self {
        Self { characters }
    }
}

fn slot(characters: &[Character], id: CharacterId) -> Result<usize> {
    characters
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| anyhow::anyhow!("Character not found: {}", id))
}

#[async_trait]
impl CharacterRepositoryPort for InMemoryCharacterRepository {
    async fn create(&self, character: &Character) -> Result<()> {
        let mut characters = self.characters.write().await;
        if characters.iter().any(|c| c.id == character.id) {
            anyhow::bail!("Character already exists: {}", character.id);
        }
        characters.push(character.clone());
        Ok(())
    }

    async fn get(&self, id: CharacterId) -> Result<Option<Character>> {
        let characters = self.characters.read().await;
        Ok(characters.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Character>> {
        Ok(self.characters.read().await.clone())
    }

    async fn update_profile(&self, character: &Character) -> Result<()> {
        let mut characters = self.characters.write().await;
        let slot = slot(&characters, character.id)?;
        let stored = &mut characters[slot];
        stored.name = character.name.clone();
        stored.class = character.class;
        stored.hit_points = character.hit_points;
        stored.strength = character.strength;
        stored.defence = character.defence;
        stored.intelligence = character.intelligence;
        Ok(())
    }

    async fn equip_weapon(&self, id: CharacterId, weapon: &Weapon) -> Result<Option<Weapon>> {
        let mut characters = self.characters.write().await;
        let slot = slot(&characters, id)?;
        Ok(characters[slot].equip(weapon.clone()))
    }

    async fn learn_skill(&self, id: CharacterId, skill: &Skill) -> Result<bool> {
        let mut characters = self.characters.write().await;
        let slot = slot(&characters, id)?;
        Ok(characters[slot].learn_skill(skill.clone()))
    }

    async fn record_combat(&self, updates: &[Character]) -> Result<()> {
        let mut characters = self.characters.write().await;

        // Check everything first so a failed batch writes nothing
        let slots = updates
            .iter()
            .map(|update| slot(&characters, update.id))
            .collect::<Result<Vec<_>>>()?;

        for (slot, update) in slots.into_iter().zip(updates) {
            let stored = &mut characters[slot];
            stored.hit_points = update.hit_points;
            stored.fights = update.fights;
            stored.victories = update.victories;
            stored.defeats = update.defeats;
        }
        Ok(())
    }

    async fn delete(&self, id: CharacterId) -> Result<()> {
        let mut characters = self.characters.write().await;
        let before = characters.len();
        characters.retain(|c| c.id != id);
        if characters.len() == before {
            anyhow::bail!("Character not found: {}", id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repository = InMemoryCharacterRepository::default();
        for name in ["Zed", "Amy", "Max"] {
            repository.create(&Character::new(name, 100, 10)).await.unwrap();
        }
        let names: Vec<_> = repository
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Max"]);
    }

    #[tokio::test]
    async fn test_record_combat_is_all_or_nothing() {
        let repository = InMemoryCharacterRepository::default();
        let mut known = Character::new("Known", 100, 10);
        repository.create(&known).await.unwrap();

        known.victories = 3;
        let stranger = Character::new("Stranger", 100, 10);
        assert!(repository.record_combat(&[known.clone(), stranger]).await.is_err());
        assert_eq!(repository.get(known.id).await.unwrap().unwrap().victories, 0);

        repository.record_combat(&[known.clone()]).await.unwrap();
        assert_eq!(repository.get(known.id).await.unwrap().unwrap().victories, 3);
    }

    #[tokio::test]
    async fn test_record_combat_keeps_newer_gear() {
        let repository = InMemoryCharacterRepository::default();
        let hero = Character::new("Hero", 100, 10).with_weapon(Weapon::new("Dagger", 5));
        repository.create(&hero).await.unwrap();

        // Copy taken before the equip, as a running fight would hold it
        let mut fought = repository.get(hero.id).await.unwrap().unwrap();
        repository
            .equip_weapon(hero.id, &Weapon::new("Excalibur", 40))
            .await
            .unwrap();
        repository
            .learn_skill(hero.id, &Skill::new("Smite", 25))
            .await
            .unwrap();

        fought.fights = 1;
        fought.victories = 1;
        repository.record_combat(&[fought]).await.unwrap();

        let stored = repository.get(hero.id).await.unwrap().unwrap();
        assert_eq!(stored.weapon.map(|w| w.name), Some("Excalibur".to_string()));
        assert_eq!(stored.skills.len(), 1);
        assert_eq!((stored.fights, stored.victories), (1, 1));
    }

    #[tokio::test]
    async fn test_update_profile_keeps_record() {
        let repository = InMemoryCharacterRepository::default();
        let hero = Character::new("Hero", 100, 10).with_record(2, 1, 1);
        repository.create(&hero).await.unwrap();

        let mut renamed = Character::new("Hero", 100, 10);
        renamed.id = hero.id;
        renamed.name = "Champion".to_string();
        renamed.strength = 15;
        repository.update_profile(&renamed).await.unwrap();

        let stored = repository.get(hero.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Champion");
        assert_eq!(stored.strength, 15);
        assert_eq!((stored.fights, stored.victories, stored.defeats), (2, 1, 1));
    }

    #[tokio::test]
    async fn test_duplicate_create_rejected() {
        let repository = InMemoryCharacterRepository::default();
        let character = Character::new("Once", 100, 10);
        repository.create(&character).await.unwrap();
        assert!(repository.create(&character).await.is_err());
    }
}
