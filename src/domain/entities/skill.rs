//! Skill entity - Learnable attacks scaled by intelligence

use crate::domain::value_objects::SkillId;

/// A skill a character can use in place of a weapon attack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    /// Base damage before the caster's intelligence is rolled in
    pub damage: i32,
}

impl Skill {
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            id: SkillId::new(),
            name: name.into(),
            damage,
        }
    }
}

/// The skill catalogue every fresh store starts with
pub fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("Fireball", 30),
        Skill::new("Frenzy", 20),
        Skill::new("Blizzard", 50),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skills() {
        let skills = default_skills();
        let names: Vec<_> = skills.iter().map(|s| (s.name.as_str(), s.damage)).collect();
        assert_eq!(names, vec![("Fireball", 30), ("Frenzy", 20), ("Blizzard", 50)]);
    }
}
