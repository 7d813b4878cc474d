//! Shared application state

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{CharacterServiceImpl, FightService, WeaponService};
use crate::domain::services::combat::StdRandom;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::InMemoryRepository;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub repository: InMemoryRepository,
    // Application services
    pub character_service: CharacterServiceImpl,
    pub weapon_service: WeaponService,
    pub fight_service: FightService<StdRandom>,
}

impl AppState {
    pub async fn new(config: AppConfig) -> Result<Self> {
        // Initialize the store with the default skill catalogue
        let repository = InMemoryRepository::with_default_skills().await?;

        let rng = match config.rng_seed {
            Some(seed) => StdRandom::from_seed(seed),
            None => StdRandom::from_entropy(),
        };

        // Initialize application services
        let characters = Arc::new(repository.characters());
        let character_service = CharacterServiceImpl::new(
            characters.clone(),
            Arc::new(repository.skills()),
            config.combat.clone(),
        );
        let weapon_service = WeaponService::new(characters.clone(), config.combat.clone());
        let fight_service = FightService::new(characters, config.combat.clone(), rng);

        Ok(Self {
            config,
            repository,
            character_service,
            weapon_service,
            fight_service,
        })
    }
}
