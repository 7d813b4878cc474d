//! Application services - Use case implementations
//!
//! Each service follows hexagonal architecture principles, accepting
//! repository ports and returning domain entities or combat outcomes.

pub mod character_service;
pub mod fight_service;
pub mod weapon_service;

// Re-export character service types
pub use character_service::{
    CharacterService, CharacterServiceImpl, CreateCharacterRequest, UpdateCharacterRequest,
};

// Re-export fight service types
pub use fight_service::{FightError, FightService};

// Re-export weapon service types
pub use weapon_service::{AddWeaponRequest, WeaponService};
