//! Lookups over a caller-supplied slice of combatants

use crate::domain::entities::Character;
use crate::domain::value_objects::CharacterId;

pub(crate) fn position(combatants: &[Character], id: CharacterId) -> Option<usize> {
    combatants.iter().position(|c| c.id == id)
}

/// Borrow two distinct combatants mutably at once
///
/// Panics if `first == second`; callers check distinctness beforehand.
pub(crate) fn pair_mut(
    combatants: &mut [Character],
    first: usize,
    second: usize,
) -> (&mut Character, &mut Character) {
    assert_ne!(first, second, "a combatant cannot be paired with itself");
    if first < second {
        let (head, tail) = combatants.split_at_mut(second);
        (&mut head[first], &mut tail[0])
    } else {
        let (head, tail) = combatants.split_at_mut(first);
        (&mut tail[0], &mut head[second])
    }
}
