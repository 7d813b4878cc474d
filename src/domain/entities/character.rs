//! Character entity - Combatants with stats, gear and a fight record

use crate::domain::entities::{Skill, Weapon};
use crate::domain::value_objects::{CharacterId, RpgClass, SkillId};

/// A player character as seen by the combat engine
///
/// The hosting layer loads characters with their weapon and skills already
/// resolved; the engine mutates `hit_points` and the record counters in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub class: RpgClass,

    // Combat stats
    /// Current hit points; may dip below zero until the fight epilogue
    pub hit_points: i32,
    pub strength: i32,
    pub defence: i32,
    pub intelligence: i32,

    // Gear
    pub weapon: Option<Weapon>,
    pub skills: Vec<Skill>,

    // Fight record
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl Character {
    pub fn new(name: impl Into<String>, hit_points: i32, base_stat: i32) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            class: RpgClass::default(),
            hit_points,
            strength: base_stat,
            defence: base_stat,
            intelligence: base_stat,
            weapon: None,
            skills: Vec::new(),
            fights: 0,
            victories: 0,
            defeats: 0,
        }
    }

    pub fn with_class(mut self, class: RpgClass) -> Self {
        self.class = class;
        self
    }

    pub fn with_stats(mut self, strength: i32, defence: i32, intelligence: i32) -> Self {
        self.strength = strength;
        self.defence = defence;
        self.intelligence = intelligence;
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.learn_skill(skill);
        self
    }

    pub fn with_record(mut self, fights: u32, victories: u32, defeats: u32) -> Self {
        self.fights = fights;
        self.victories = victories;
        self.defeats = defeats;
        self
    }

    /// Equip a weapon, returning the one it replaced
    pub fn equip(&mut self, weapon: Weapon) -> Option<Weapon> {
        self.weapon.replace(weapon)
    }

    /// Learn a skill; returns false if it was already known
    pub fn learn_skill(&mut self, skill: Skill) -> bool {
        if self.knows_skill(skill.id) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub fn knows_skill(&self, skill_id: SkillId) -> bool {
        self.skills.iter().any(|s| s.id == skill_id)
    }

    pub fn skill(&self, skill_id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == skill_id)
    }

    pub fn is_defeated(&self) -> bool {
        self.hit_points <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character_uses_base_stat() {
        let character = Character::new("Aladdin", 100, 10);
        assert_eq!(character.hit_points, 100);
        assert_eq!(character.strength, 10);
        assert_eq!(character.defence, 10);
        assert_eq!(character.intelligence, 10);
        assert_eq!(character.class, RpgClass::Knight);
        assert!(character.weapon.is_none());
        assert!(character.skills.is_empty());
    }

    #[test]
    fn test_learn_skill_is_idempotent() {
        let fireball = Skill::new("Fireball", 30);
        let mut character = Character::new("Jafar", 100, 10);
        assert!(character.learn_skill(fireball.clone()));
        assert!(!character.learn_skill(fireball.clone()));
        assert_eq!(character.skills.len(), 1);
        assert!(character.knows_skill(fireball.id));
    }

    #[test]
    fn test_equip_replaces_weapon() {
        let mut character = Character::new("Ali Baba", 100, 10);
        assert!(character.equip(Weapon::new("Scimitar", 15)).is_none());
        let old = character.equip(Weapon::new("Lamp", 5));
        assert_eq!(old.map(|w| w.name), Some("Scimitar".to_string()));
        assert_eq!(character.weapon.as_ref().map(|w| w.damage), Some(5));
    }

    #[test]
    fn test_is_defeated_at_zero() {
        let mut character = Character::new("Genie", 100, 10);
        character.hit_points = 0;
        assert!(character.is_defeated());
        character.hit_points = -4;
        assert!(character.is_defeated());
    }
}
