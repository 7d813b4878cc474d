//! Combat resolution
//!
//! Pure, synchronous rules over caller-owned characters: damage rolls, single
//! attacks, free-for-all fights and the high-score table. Nothing here does
//! I/O; all randomness comes from an injected [`RandomSource`].

mod attack;
mod damage;
mod error;
mod free_for_all;
mod ranking;
mod rng;
mod roster;

pub use attack::{resolve_single_attack, AttackOutcome, AttackRequest};
pub use damage::{apply_damage, resolve_damage, strike, Attack, AttackKind};
pub use error::CombatError;
pub use free_for_all::{resolve_free_for_all, FightReport};
pub use ranking::{compute_leaderboard, HighScoreEntry};
pub use rng::{RandomSource, ScriptedRandom, StdRandom};
