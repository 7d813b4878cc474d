//! Single attack resolution
//!
//! Resolves one explicit attacker -> opponent exchange. Unlike a free-for-all,
//! a single attack never touches the fight record and never restores hit
//! points; it only reports whether the opponent went down.

use tracing::debug;

use crate::domain::entities::Character;
use crate::domain::services::combat::damage::{strike, Attack, AttackKind};
use crate::domain::services::combat::error::CombatError;
use crate::domain::services::combat::rng::RandomSource;
use crate::domain::services::combat::roster::{pair_mut, position};
use crate::domain::value_objects::{CharacterId, SkillId};

/// One attack a caller wants resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackRequest {
    pub attacker_id: CharacterId,
    pub opponent_id: CharacterId,
    pub kind: AttackKind,
}

impl AttackRequest {
    pub fn weapon(attacker_id: CharacterId, opponent_id: CharacterId) -> Self {
        Self {
            attacker_id,
            opponent_id,
            kind: AttackKind::Weapon,
        }
    }

    pub fn skill(
        attacker_id: CharacterId,
        opponent_id: CharacterId,
        skill_id: SkillId,
    ) -> Self {
        Self {
            attacker_id,
            opponent_id,
            kind: AttackKind::Skill(skill_id),
        }
    }
}

/// What happened in a single attack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackOutcome {
    pub attacker: String,
    pub opponent: String,
    pub attack_used: String,
    pub attacker_hp: i32,
    pub opponent_hp: i32,
    /// Raw rolled damage, negative on a clean miss
    pub damage: i32,
    /// Opponent hit points are at or below zero
    pub defeated: bool,
}

/// Resolve exactly one attack between two members of `combatants`
///
/// All preconditions are checked before anything is rolled, so a rejected
/// request leaves every combatant untouched.
pub fn resolve_single_attack<R>(
    combatants: &mut [Character],
    request: &AttackRequest,
    rng: &mut R,
) -> Result<AttackOutcome, CombatError>
where
    R: RandomSource + ?Sized,
{
    if request.attacker_id == request.opponent_id {
        return Err(CombatError::InvalidRequest(
            "A character cannot attack itself".to_string(),
        ));
    }

    let attacker_idx = position(combatants, request.attacker_id)
        .ok_or_else(|| CombatError::NotFound(format!("Attacker {}", request.attacker_id)))?;
    let opponent_idx = position(combatants, request.opponent_id)
        .ok_or_else(|| CombatError::NotFound(format!("Opponent {}", request.opponent_id)))?;

    let (attacker, opponent) = pair_mut(combatants, attacker_idx, opponent_idx);

    let attack = match request.kind {
        AttackKind::Weapon => attacker.weapon.as_ref().map(Attack::Weapon).ok_or_else(|| {
            CombatError::InvalidAttack(format!("{} has no weapon equipped", attacker.name))
        })?,
        AttackKind::Skill(skill_id) => attacker.skill(skill_id).map(Attack::Skill).ok_or_else(|| {
            CombatError::InvalidAttack(format!("{} does not have that skill", attacker.name))
        })?,
    };

    let damage = strike(attacker, &attack, opponent, rng);

    debug!(
        attacker = %attacker.name,
        opponent = %opponent.name,
        attack = attack.name(),
        damage,
        "Resolved single attack"
    );

    Ok(AttackOutcome {
        attacker: attacker.name.clone(),
        opponent: opponent.name.clone(),
        attack_used: attack.name().to_string(),
        attacker_hp: attacker.hit_points,
        opponent_hp: opponent.hit_points,
        damage,
        defeated: opponent.is_defeated(),
    })
}
