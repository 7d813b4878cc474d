//! Value objects - Immutable objects defined by their attributes

mod combat_settings;
mod ids;
mod rpg_class;

pub use combat_settings::CombatSettings;
pub use ids::*;
pub use rpg_class::RpgClass;
