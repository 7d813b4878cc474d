//! Fight Service - Loads combatants, runs the combat engine, persists results
//!
//! The combat rules themselves live in `domain::services::combat`; this service
//! owns the load -> resolve -> persist cycle around them. The randomness source
//! is held behind a mutex for the whole cycle, so fights and attacks handled by
//! one service never interleave. Results are written back with
//! `record_combat`, which only touches hit points and fight counters, so gear
//! and profile edits made by other services during a fight are kept.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::CharacterRepositoryPort;
use crate::domain::entities::Character;
use crate::domain::services::combat::{
    compute_leaderboard, resolve_free_for_all, resolve_single_attack, AttackOutcome,
    AttackRequest, CombatError, FightReport, HighScoreEntry, RandomSource,
};
use crate::domain::value_objects::{CharacterId, CombatSettings, SkillId};

/// Errors that can occur while handling a fight request
#[derive(Debug, thiserror::Error)]
pub enum FightError {
    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<anyhow::Error> for FightError {
    fn from(err: anyhow::Error) -> Self {
        Self::Repository(format!("{:#}", err))
    }
}

/// Service for attacks, free-for-all fights and the high-score table
pub struct FightService<R: RandomSource> {
    characters: Arc<dyn CharacterRepositoryPort>,
    settings: CombatSettings,
    rng: Mutex<R>,
}

impl<R: RandomSource> FightService<R> {
    pub fn new(characters: Arc<dyn CharacterRepositoryPort>, settings: CombatSettings, rng: R) -> Self {
        Self {
            characters,
            settings,
            rng: Mutex::new(rng),
        }
    }

    /// Attack an opponent with the attacker's equipped weapon
    #[instrument(skip(self))]
    pub async fn weapon_attack(
        &self,
        attacker_id: CharacterId,
        opponent_id: CharacterId,
    ) -> Result<AttackOutcome, FightError> {
        self.attack(AttackRequest::weapon(attacker_id, opponent_id)).await
    }

    /// Attack an opponent with one of the attacker's skills
    #[instrument(skip(self))]
    pub async fn skill_attack(
        &self,
        attacker_id: CharacterId,
        opponent_id: CharacterId,
        skill_id: SkillId,
    ) -> Result<AttackOutcome, FightError> {
        self.attack(AttackRequest::skill(attacker_id, opponent_id, skill_id))
            .await
    }

    async fn attack(&self, request: AttackRequest) -> Result<AttackOutcome, FightError> {
        let mut rng = self.rng.lock().await;

        let mut duel = Vec::with_capacity(2);
        duel.push(self.load(request.attacker_id).await?);
        if request.opponent_id != request.attacker_id {
            duel.push(self.load(request.opponent_id).await?);
        }

        let outcome = resolve_single_attack(&mut duel, &request, &mut *rng)?;

        if let Some(opponent) = duel.iter().find(|c| c.id == request.opponent_id) {
            self.characters
                .record_combat(std::slice::from_ref(opponent))
                .await?;
        }

        if outcome.defeated {
            info!("{} has been defeated", outcome.opponent);
        }
        Ok(outcome)
    }

    /// Run a free-for-all among the given characters
    ///
    /// Repeated ids collapse to their first occurrence, which also fixes the
    /// turn order.
    #[instrument(skip(self), fields(requested = participant_ids.len()))]
    pub async fn fight(&self, participant_ids: &[CharacterId]) -> Result<FightReport, FightError> {
        let mut seen = HashSet::new();
        let ids: Vec<CharacterId> = participant_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect();

        if ids.len() < 2 {
            return Err(CombatError::InvalidRequest(
                "A fight needs at least two distinct participants".to_string(),
            )
            .into());
        }

        let mut rng = self.rng.lock().await;

        let mut roster = Vec::with_capacity(ids.len());
        for id in ids {
            roster.push(self.load(id).await?);
        }

        let report = resolve_free_for_all(&mut roster, &self.settings, &mut *rng)?;
        self.characters.record_combat(&roster).await?;

        debug!(log_lines = report.log.len(), "Fight persisted");
        Ok(report)
    }

    /// Leaderboard over every stored character that has fought
    #[instrument(skip(self))]
    pub async fn high_score(&self) -> Result<Vec<HighScoreEntry>, FightError> {
        let characters = self.characters.list().await?;
        Ok(compute_leaderboard(&characters))
    }

    async fn load(&self, id: CharacterId) -> Result<Character, FightError> {
        self.characters
            .get(id)
            .await?
            .ok_or_else(|| CombatError::NotFound(format!("Character {}", id)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Skill, Weapon};
    use crate::application::services::{AddWeaponRequest, WeaponService};
    use crate::domain::services::combat::{ScriptedRandom, StdRandom};
    use crate::infrastructure::persistence::{InMemoryCharacterRepository, InMemoryRepository};

    async fn seeded(characters: &[Character]) -> InMemoryCharacterRepository {
        let repository = InMemoryRepository::new().characters();
        for character in characters {
            repository.create(character).await.unwrap();
        }
        repository
    }

    #[tokio::test]
    async fn test_weapon_attack_persists_opponent_only() {
        let hero = Character::new("Aladdin", 100, 10).with_weapon(Weapon::new("Scimitar", 20));
        let villain = Character::new("Jafar", 100, 10).with_stats(10, 5, 10);
        let repository = seeded(&[hero.clone(), villain.clone()]).await;
        let service = FightService::new(
            Arc::new(repository.clone()),
            CombatSettings::default(),
            ScriptedRandom::zeros(),
        );

        let outcome = service.weapon_attack(hero.id, villain.id).await.unwrap();
        assert_eq!(outcome.damage, 20);
        assert_eq!(outcome.opponent_hp, 80);

        let stored = repository.get(villain.id).await.unwrap().unwrap();
        assert_eq!(stored.hit_points, 80);
        assert_eq!((stored.fights, stored.defeats), (0, 0));
    }

    #[tokio::test]
    async fn test_skill_attack_errors() {
        let hero = Character::new("Aladdin", 100, 10).with_skill(Skill::new("Frenzy", 20));
        let villain = Character::new("Jafar", 100, 10);
        let repository = seeded(&[hero.clone(), villain.clone()]).await;
        let service = FightService::new(
            Arc::new(repository.clone()),
            CombatSettings::default(),
            ScriptedRandom::zeros(),
        );

        let unknown = service
            .skill_attack(hero.id, villain.id, SkillId::new())
            .await
            .unwrap_err();
        assert!(matches!(unknown, FightError::Combat(CombatError::InvalidAttack(_))));

        let unarmed = service.weapon_attack(hero.id, villain.id).await.unwrap_err();
        assert!(matches!(unarmed, FightError::Combat(CombatError::InvalidAttack(_))));

        let missing = service
            .weapon_attack(CharacterId::new(), villain.id)
            .await
            .unwrap_err();
        assert!(matches!(missing, FightError::Combat(CombatError::NotFound(_))));

        let stored = repository.get(villain.id).await.unwrap().unwrap();
        assert_eq!(stored.hit_points, 100);
    }

    #[tokio::test]
    async fn test_defeat_by_single_attack_keeps_record() {
        let hero = Character::new("Aladdin", 100, 10).with_weapon(Weapon::new("Lamp", 120));
        let villain = Character::new("Jafar", 100, 10);
        let repository = seeded(&[hero.clone(), villain.clone()]).await;
        let service = FightService::new(
            Arc::new(repository.clone()),
            CombatSettings::default(),
            ScriptedRandom::zeros(),
        );

        let outcome = service.weapon_attack(hero.id, villain.id).await.unwrap();
        assert!(outcome.defeated);

        let stored = repository.get(villain.id).await.unwrap().unwrap();
        assert_eq!(stored.hit_points, -20);
        assert_eq!(stored.defeats, 0);
    }

    #[tokio::test]
    async fn test_fight_persists_every_participant() {
        let roster: Vec<Character> = ["A", "B", "C"]
            .iter()
            .map(|name| {
                Character::new(*name, 100, 10)
                    .with_weapon(Weapon::new("Sword", 25))
                    .with_skill(Skill::new("Fireball", 30))
            })
            .collect();
        let repository = seeded(&roster).await;
        let service = FightService::new(
            Arc::new(repository.clone()),
            CombatSettings::default(),
            StdRandom::from_seed(11),
        );

        let ids: Vec<CharacterId> = roster.iter().map(|c| c.id).collect();
        let report = service.fight(&ids).await.unwrap();
        assert!(report.victor.is_some());
        assert!(report.log.iter().any(|line| line.ends_with("has been defeated!")));

        let stored = repository.list().await.unwrap();
        assert!(stored.iter().all(|c| c.fights == 1 && c.hit_points == 100));
        assert_eq!(stored.iter().map(|c| c.victories).sum::<u32>(), 1);
        assert_eq!(stored.iter().map(|c| c.defeats).sum::<u32>(), 1);

        let board = service.high_score().await.unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(Some(board[0].id), report.victor);
        assert_eq!(Some(board[2].id), report.defeated);
    }

    #[tokio::test]
    async fn test_fight_request_validation() {
        let a = Character::new("A", 100, 10);
        let b = Character::new("B", 100, 10);
        let repository = seeded(&[a.clone(), b.clone()]).await;
        let service = FightService::new(
            Arc::new(repository),
            CombatSettings::default(),
            ScriptedRandom::zeros(),
        );

        let repeated = service.fight(&[a.id, a.id]).await.unwrap_err();
        assert!(matches!(repeated, FightError::Combat(CombatError::InvalidRequest(_))));

        let missing = service.fight(&[a.id, CharacterId::new()]).await.unwrap_err();
        assert!(matches!(missing, FightError::Combat(CombatError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_oversized_weapon_is_rejected_before_it_can_attack() {
        let hero = Character::new("Aladdin", 100, 10);
        let villain = Character::new("Jafar", 100, 10);
        let repository = seeded(&[hero.clone(), villain.clone()]).await;
        let weapons = WeaponService::new(Arc::new(repository.clone()), CombatSettings::default());
        let service = FightService::new(
            Arc::new(repository.clone()),
            CombatSettings::default(),
            ScriptedRandom::new([5]),
        );

        let equip = weapons
            .add_weapon(AddWeaponRequest {
                character_id: hero.id,
                name: "Lamp of Infinity".to_string(),
                damage: i32::MAX,
            })
            .await;
        assert!(equip.is_err());

        let unarmed = service.weapon_attack(hero.id, villain.id).await.unwrap_err();
        assert!(matches!(unarmed, FightError::Combat(CombatError::InvalidAttack(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_equip_during_fight_is_kept() {
        let a = Character::new("A", 100, 10).with_weapon(Weapon::new("Dagger", 30));
        let b = Character::new("B", 100, 10).with_weapon(Weapon::new("Club", 30));
        let repository = seeded(&[a.clone(), b.clone()]).await;
        let service = Arc::new(FightService::new(
            Arc::new(repository.clone()),
            CombatSettings::default(),
            StdRandom::from_seed(3),
        ));
        let weapons = WeaponService::new(Arc::new(repository.clone()), CombatSettings::default());

        for round in 0..100u32 {
            let fight = {
                let service = Arc::clone(&service);
                let ids = [a.id, b.id];
                tokio::spawn(async move { service.fight(&ids).await })
            };
            tokio::task::yield_now().await;

            let name = format!("Excalibur {}", round);
            weapons
                .add_weapon(AddWeaponRequest {
                    character_id: a.id,
                    name: name.clone(),
                    damage: 40,
                })
                .await
                .unwrap();
            fight.await.unwrap().unwrap();

            let stored = repository.get(a.id).await.unwrap().unwrap();
            assert_eq!(stored.weapon.map(|w| w.name), Some(name));
            assert_eq!(stored.fights, round + 1);
        }
    }
}
