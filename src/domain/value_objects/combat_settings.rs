//! Combat tuning value object
//!
//! Mirrors how application settings are layered: compiled defaults, then
//! environment overrides.

use serde::{Deserialize, Serialize};

/// Tunables shared by the combat engine and the character services
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombatSettings {
    /// Hit points every character starts with and is restored to after a fight
    pub baseline_hit_points: i32,
    /// Default strength/defence/intelligence for new characters
    pub default_stat: i32,
    /// Highest strength/defence/intelligence a character may be given
    pub max_stat_value: i32,
    /// Highest base damage a weapon or skill may carry
    pub max_damage_value: i32,
    /// Optional round cap for free-for-all fights; `None` fights to the first defeat
    pub max_rounds: Option<u32>,
}

impl Default for CombatSettings {
    fn default() -> Self {
        Self {
            baseline_hit_points: 100,
            default_stat: 10,
            max_stat_value: 100,
            max_damage_value: 1000,
            max_rounds: None,
        }
    }
}

impl CombatSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            baseline_hit_points: env_or("ARENA_BASELINE_HIT_POINTS", defaults.baseline_hit_points),
            default_stat: env_or("ARENA_DEFAULT_STAT", defaults.default_stat),
            max_stat_value: env_or("ARENA_MAX_STAT", defaults.max_stat_value),
            max_damage_value: env_or("ARENA_MAX_DAMAGE", defaults.max_damage_value),
            max_rounds: std::env::var("ARENA_MAX_ROUNDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|rounds: &u32| *rounds > 0),
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
