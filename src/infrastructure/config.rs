//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::domain::value_objects::CombatSettings;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Seed for the fight randomness; unset draws from OS entropy
    pub rng_seed: Option<u64>,
    /// JSON roster used to populate the store at startup
    pub roster_path: Option<PathBuf>,
    /// Combat tuning
    pub combat: CombatSettings,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let rng_seed = match env::var("ARENA_RNG_SEED") {
            Ok(value) => Some(
                value
                    .trim()
                    .parse()
                    .context("ARENA_RNG_SEED must be an unsigned integer")?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            rng_seed,
            roster_path: env::var("ARENA_ROSTER_PATH").ok().map(PathBuf::from),
            combat: CombatSettings::from_env(),
        })
    }
}
