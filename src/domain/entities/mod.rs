//! Domain entities - Core business objects with identity

mod character;
mod skill;
mod weapon;

pub use character::Character;
pub use skill::{default_skills, Skill};
pub use weapon::Weapon;
