use thiserror::Error;

use crate::types::Side;

/// Reasons a battle cannot be started
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("The {0} roster is empty")]
    EmptyRoster(Side),

    #[error("The {side} roster has {size} members (max 6)")]
    RosterTooLarge { side: Side, size: usize },
}
