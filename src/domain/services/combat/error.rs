//! Combat errors

/// Reasons a combat request is rejected before anything is mutated
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// Attacker, opponent or participant could not be located
    #[error("Not found: {0}")]
    NotFound(String),

    /// The attacker lacks the weapon or skill the attack needs
    #[error("Invalid attack: {0}")]
    InvalidAttack(String),

    /// The request itself is malformed (too few or repeated participants)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
