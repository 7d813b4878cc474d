//! Damage resolution for a single strike

use crate::domain::entities::{Character, Skill, Weapon};
use crate::domain::services::combat::rng::RandomSource;
use crate::domain::value_objects::SkillId;

/// Which attack a caller asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    Weapon,
    Skill(SkillId),
}

/// An attack resolved against the attacker's gear
#[derive(Debug, Clone, Copy)]
pub enum Attack<'a> {
    Weapon(&'a Weapon),
    Skill(&'a Skill),
}

impl<'a> Attack<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            Attack::Weapon(weapon) => &weapon.name,
            Attack::Skill(skill) => &skill.name,
        }
    }

    pub fn base_damage(&self) -> i32 {
        match self {
            Attack::Weapon(weapon) => weapon.damage,
            Attack::Skill(skill) => skill.damage,
        }
    }

    /// Weapons scale with strength, skills with intelligence
    pub fn offensive_stat(&self, attacker: &Character) -> i32 {
        match self {
            Attack::Weapon(_) => attacker.strength,
            Attack::Skill(_) => attacker.intelligence,
        }
    }
}

/// Compute raw damage: `base + [0, offensive) - [0, defence)`
///
/// The result may be zero or negative; callers report it verbatim and only
/// apply it when strictly positive. Saturates at the `i32` bounds.
pub fn resolve_damage<R>(base: i32, offensive_stat: i32, opponent_defence: i32, rng: &mut R) -> i32
where
    R: RandomSource + ?Sized,
{
    let damage = base.saturating_add(rng.next_below(offensive_stat));
    damage.saturating_sub(rng.next_below(opponent_defence))
}

/// Subtract damage from the opponent; misses (damage <= 0) change nothing
pub fn apply_damage(opponent: &mut Character, damage: i32) {
    if damage > 0 {
        opponent.hit_points = opponent.hit_points.saturating_sub(damage);
    }
}

/// Roll and apply one attack, returning the raw damage
pub fn strike<R>(attacker: &Character, attack: &Attack<'_>, opponent: &mut Character, rng: &mut R) -> i32
where
    R: RandomSource + ?Sized,
{
    let damage = resolve_damage(
        attack.base_damage(),
        attack.offensive_stat(attacker),
        opponent.defence,
        rng,
    );
    apply_damage(opponent, damage);
    damage
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::combat::rng::{ScriptedRandom, StdRandom};

    #[test]
    fn test_zero_draws_return_base() {
        let mut rng = ScriptedRandom::zeros();
        assert_eq!(resolve_damage(20, 10, 5, &mut rng), 20);
    }

    #[test]
    fn test_damage_stays_within_bounds() {
        let mut rng = StdRandom::from_seed(1234);
        for _ in 0..2000 {
            let damage = resolve_damage(20, 10, 5, &mut rng);
            assert!((16..=29).contains(&damage), "damage {} out of range", damage);
        }
    }

    #[test]
    fn test_zero_stats_never_roll() {
        let mut rng = StdRandom::from_seed(5);
        for _ in 0..100 {
            assert_eq!(resolve_damage(12, 0, 0, &mut rng), 12);
        }
    }

    #[test]
    fn test_offence_rolled_before_defence() {
        let mut rng = ScriptedRandom::new([3, 8]);
        assert_eq!(resolve_damage(10, 10, 10, &mut rng), 5);
    }

    #[test]
    fn test_miss_leaves_hit_points() {
        let mut opponent = Character::new("Target", 100, 10);
        apply_damage(&mut opponent, 0);
        apply_damage(&mut opponent, -6);
        assert_eq!(opponent.hit_points, 100);
        apply_damage(&mut opponent, 25);
        assert_eq!(opponent.hit_points, 75);
    }

    #[test]
    fn test_skill_strike_uses_intelligence() {
        let fireball = Skill::new("Fireball", 30);
        let attacker = Character::new("Mage", 100, 0)
            .with_stats(0, 0, 10)
            .with_skill(fireball.clone());
        let mut opponent = Character::new("Target", 100, 0);
        // offence draw 9 is within intelligence; strength 0 would have forced 0
        let mut rng = ScriptedRandom::new([9]);
        let damage = strike(&attacker, &Attack::Skill(&fireball), &mut opponent, &mut rng);
        assert_eq!(damage, 39);
        assert_eq!(opponent.hit_points, 61);
    }

    #[test]
    fn test_extreme_values_saturate() {
        let mut rng = ScriptedRandom::new([5, 0]);
        assert_eq!(resolve_damage(i32::MAX, 10, 0, &mut rng), i32::MAX);

        let mut rng = ScriptedRandom::new([0, 7]);
        assert_eq!(resolve_damage(i32::MIN + 3, 0, 10, &mut rng), i32::MIN);

        let mut opponent = Character::new("Target", -10, 10);
        apply_damage(&mut opponent, i32::MAX);
        assert_eq!(opponent.hit_points, i32::MIN);
        assert!(opponent.is_defeated());
    }
}
