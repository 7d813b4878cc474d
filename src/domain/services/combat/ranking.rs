//! High-score ranking

use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

/// One leaderboard row, derived from a character's fight record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub id: CharacterId,
    pub name: String,
    pub fights: u32,
    pub victories: u32,
    pub defeats: u32,
}

impl From<&Character> for HighScoreEntry {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            fights: character.fights,
            victories: character.victories,
            defeats: character.defeats,
        }
    }
}

/// Rank everyone who has fought: most victories first, then fewest defeats
///
/// Exact ties keep their input order.
pub fn compute_leaderboard<'a, I>(combatants: I) -> Vec<HighScoreEntry>
where
    I: IntoIterator<Item = &'a Character>,
{
    let mut entries: Vec<HighScoreEntry> = combatants
        .into_iter()
        .filter(|c| c.fights > 0)
        .map(HighScoreEntry::from)
        .collect();

    entries.sort_by(|a, b| {
        b.victories
            .cmp(&a.victories)
            .then_with(|| a.defeats.cmp(&b.defeats))
    });
    entries
}
