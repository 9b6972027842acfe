use pokeduel_battle::CreatureId;
use thiserror::Error;

/// Rejected roster or history operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("Roster is full (max 6 creatures)")]
    RosterFull,

    #[error("Creature {0} is already on the roster")]
    DuplicateCreature(CreatureId),

    #[error("Creature {0} is not on the roster")]
    NotFound(CreatureId),

    #[error("Store failure: {0}")]
    PersistenceFailure(String),
}
