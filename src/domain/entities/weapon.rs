//! Weapon entity

use crate::domain::value_objects::WeaponId;

/// A weapon equipped by exactly one character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    /// Base damage before the wielder's strength is rolled in
    pub damage: i32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            id: WeaponId::new(),
            name: name.into(),
            damage,
        }
    }
}
