//! Roster membership rules shared by every store

use pokeduel_battle::{Creature, MAX_ROSTER_SIZE};

use crate::error::RosterError;

/// Check that `creature` may join `roster`
///
/// A full roster is reported before a duplicate.
pub fn check_can_add(roster: &[Creature], creature: &Creature) -> Result<(), RosterError> {
    if roster.len() >= MAX_ROSTER_SIZE {
        return Err(RosterError::RosterFull);
    }
    if roster.iter().any(|c| c.id == creature.id) {
        return Err(RosterError::DuplicateCreature(creature.id));
    }
    Ok(())
}

/// Whether a roster can still take members
pub fn has_room(roster: &[Creature]) -> bool {
    roster.len() < MAX_ROSTER_SIZE
}
