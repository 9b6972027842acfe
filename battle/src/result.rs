//! Finished battles, as handed to the history store

use chrono::{DateTime, Utc};
use pokeduel_protocol::{BattleRecord, LogEntry};

use crate::event::CombatEvent;
use crate::log::render_with_rosters;
use crate::types::{Creature, Side};

/// Outcome of one completed battle
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    /// When the battle was resolved
    pub timestamp: DateTime<Utc>,
    pub player: Vec<Creature>,
    pub opponent: Vec<Creature>,
    pub winner: Side,
    /// Full, untruncated combat log
    pub events: Vec<CombatEvent>,
}

impl BattleResult {
    pub fn log(&self) -> Vec<LogEntry> {
        render_with_rosters(&self.events, &self.player, &self.opponent)
    }

    /// Convert to the persisted history shape
    pub fn to_record(&self) -> BattleRecord {
        BattleRecord {
            date: self.timestamp,
            player_team: self.player.iter().map(Creature::to_stored).collect(),
            opponent_team: self.opponent.iter().map(Creature::to_stored).collect(),
            winner: self.winner.to_protocol(),
            log: self.log(),
        }
    }
}
