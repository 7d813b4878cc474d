//! Free-for-all fights
//!
//! Combatants take turns in roster order, round after round, each attacking a
//! random other participant with a randomly chosen weapon or skill. The fight
//! ends at the first defeat; the rest of that round is skipped. Afterwards
//! every participant, bystanders included, has the fight recorded and hit
//! points restored to the baseline.
//!
//! Without a round cap a fight where no one can deal positive damage never
//! ends. `CombatSettings::max_rounds` lets the host bound that.

use std::collections::HashSet;

use tracing::{debug, info, trace};

use crate::domain::entities::Character;
use crate::domain::services::combat::damage::{strike, Attack};
use crate::domain::services::combat::error::CombatError;
use crate::domain::services::combat::rng::RandomSource;
use crate::domain::services::combat::roster::pair_mut;
use crate::domain::value_objects::{CharacterId, CombatSettings};

/// Result of a free-for-all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightReport {
    /// Human-readable fight log, in order
    pub log: Vec<String>,
    pub victor: Option<CharacterId>,
    pub defeated: Option<CharacterId>,
    /// Rounds started, including the one the fight ended in
    pub rounds: u32,
}

impl FightReport {
    /// The round cap was hit before anyone went down
    pub fn is_draw(&self) -> bool {
        self.victor.is_none()
    }
}

/// Run a free-for-all among `combatants` in their given order
pub fn resolve_free_for_all<R>(
    combatants: &mut [Character],
    settings: &CombatSettings,
    rng: &mut R,
) -> Result<FightReport, CombatError>
where
    R: RandomSource + ?Sized,
{
    validate_roster(combatants)?;

    debug!(participants = combatants.len(), "Starting free-for-all");

    let mut log = Vec::new();
    let mut rounds = 0u32;
    let mut decided = None;

    'fight: loop {
        if let Some(max_rounds) = settings.max_rounds {
            if rounds >= max_rounds {
                log.push(format!("The fight ended in a draw after {} rounds", rounds));
                break;
            }
        }
        rounds += 1;

        for attacker_idx in 0..combatants.len() {
            if let Some(result) = take_turn(combatants, attacker_idx, &mut log, rng) {
                decided = Some(result);
                break 'fight;
            }
        }
    }

    for character in combatants.iter_mut() {
        character.fights += 1;
        character.hit_points = settings.baseline_hit_points;
    }

    let (victor, defeated) = match decided {
        Some((victor, defeated)) => (Some(victor), Some(defeated)),
        None => (None, None),
    };

    info!(
        rounds,
        victor = ?victor,
        defeated = ?defeated,
        "Free-for-all concluded"
    );

    Ok(FightReport {
        log,
        victor,
        defeated,
        rounds,
    })
}

fn validate_roster(combatants: &[Character]) -> Result<(), CombatError> {
    if combatants.len() < 2 {
        return Err(CombatError::InvalidRequest(
            "A fight needs at least two participants".to_string(),
        ));
    }
    let mut seen = HashSet::with_capacity(combatants.len());
    if let Some(repeat) = combatants.iter().find(|c| !seen.insert(c.id)) {
        return Err(CombatError::InvalidRequest(format!(
            "{} is listed more than once",
            repeat.name
        )));
    }
    Ok(())
}

/// Pick any participant other than the attacker, uniformly
fn pick_opponent<R>(len: usize, attacker_idx: usize, rng: &mut R) -> usize
where
    R: RandomSource + ?Sized,
{
    let pick = rng.next_index(len - 1);
    if pick >= attacker_idx {
        pick + 1
    } else {
        pick
    }
}

/// Play one attacker's turn; returns `(victor, defeated)` if it ended the fight
fn take_turn<R>(
    combatants: &mut [Character],
    attacker_idx: usize,
    log: &mut Vec<String>,
    rng: &mut R,
) -> Option<(CharacterId, CharacterId)>
where
    R: RandomSource + ?Sized,
{
    let opponent_idx = pick_opponent(combatants.len(), attacker_idx, rng);
    let use_weapon = rng.next_below(2) == 0;

    let (attacker, opponent) = pair_mut(combatants, attacker_idx, opponent_idx);

    let attack = if use_weapon {
        attacker.weapon.as_ref().map(Attack::Weapon)
    } else if attacker.skills.is_empty() {
        None
    } else {
        let skill_idx = rng.next_index(attacker.skills.len());
        Some(Attack::Skill(&attacker.skills[skill_idx]))
    };

    let Some(attack) = attack else {
        trace!(attacker = %attacker.name, use_weapon, "Attacker has nothing to attack with");
        log.push(format!("{} wasn't able to attack!", attacker.name));
        return None;
    };

    let damage = strike(attacker, &attack, opponent, rng);
    log.push(format!(
        "{} attacks {} using {} with {} damage",
        attacker.name,
        opponent.name,
        attack.name(),
        damage.max(0)
    ));
    trace!(
        attacker = %attacker.name,
        opponent = %opponent.name,
        damage,
        opponent_hp = opponent.hit_points,
        "Turn resolved"
    );

    if !opponent.is_defeated() {
        return None;
    }

    attacker.victories += 1;
    opponent.defeats += 1;
    log.push(format!("{} has been defeated!", opponent.name));
    log.push(format!(
        "{} is victorious with {} HP left!",
        attacker.name, attacker.hit_points
    ));

    Some((attacker.id, opponent.id))
}
