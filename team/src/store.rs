//! Roster and history store interfaces

use std::sync::RwLock;

use async_trait::async_trait;
use pokeduel_battle::{Creature, CreatureId};
use pokeduel_protocol::BattleRecord;

use crate::error::RosterError;
use crate::rules::check_can_add;

/// Persistent roster of the player
#[async_trait]
pub trait RosterStore: Send + Sync {
    /// Current roster in send-out order
    async fn roster(&self) -> Result<Vec<Creature>, RosterError>;

    /// Append a creature, enforcing the roster rules
    async fn add_to_roster(&self, creature: Creature) -> Result<(), RosterError>;

    async fn remove_from_roster(&self, id: CreatureId) -> Result<(), RosterError>;
}

/// Append-only history of finished battles
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append_battle_result(&self, record: BattleRecord) -> Result<(), RosterError>;

    /// All stored results, in no particular order
    async fn list_battle_results(&self) -> Result<Vec<BattleRecord>, RosterError>;
}

/// In-process store holding both the roster and the history
#[derive(Debug, Default)]
pub struct MemoryStore {
    roster: RwLock<Vec<Creature>>,
    history: RwLock<Vec<BattleRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing roster, bypassing the roster rules
    pub fn with_roster(roster: Vec<Creature>) -> Self {
        Self {
            roster: RwLock::new(roster),
            history: RwLock::default(),
        }
    }
}

fn poisoned<T>(_: T) -> RosterError {
    RosterError::PersistenceFailure("store lock poisoned".to_string())
}

#[async_trait]
impl RosterStore for MemoryStore {
    async fn roster(&self) -> Result<Vec<Creature>, RosterError> {
        Ok(self.roster.read().map_err(poisoned)?.clone())
    }

    async fn add_to_roster(&self, creature: Creature) -> Result<(), RosterError> {
        let mut roster = self.roster.write().map_err(poisoned)?;
        check_can_add(&roster, &creature)?;
        tracing::debug!(id = creature.id, name = %creature.name, "Added to roster");
        roster.push(creature);
        Ok(())
    }

    async fn remove_from_roster(&self, id: CreatureId) -> Result<(), RosterError> {
        let mut roster = self.roster.write().map_err(poisoned)?;
        let index = roster
            .iter()
            .position(|c| c.id == id)
            .ok_or(RosterError::NotFound(id))?;
        roster.remove(index);
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for MemoryStore {
    async fn append_battle_result(&self, record: BattleRecord) -> Result<(), RosterError> {
        self.history.write().map_err(poisoned)?.push(record);
        Ok(())
    }

    async fn list_battle_results(&self) -> Result<Vec<BattleRecord>, RosterError> {
        Ok(self.history.read().map_err(poisoned)?.clone())
    }
}
