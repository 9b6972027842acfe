//! Roster snapshots taken at battle start

use crate::error::BattleError;
use crate::types::{Creature, CreatureId, Side};

/// Maximum number of creatures on a roster
pub const MAX_ROSTER_SIZE: usize = 6;

/// Ordered roster; order is send-out order
pub type Roster = Vec<Creature>;

/// Immutable copies of both rosters as they were when the battle started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterSnapshot {
    player: Roster,
    opponent: Roster,
}

impl RosterSnapshot {
    /// Copy both rosters, rejecting empty or oversized ones
    pub fn new(player: &[Creature], opponent: &[Creature]) -> Result<Self, BattleError> {
        for (side, roster) in [(Side::Player, player), (Side::Opponent, opponent)] {
            if roster.is_empty() {
                return Err(BattleError::EmptyRoster(side));
            }
            if roster.len() > MAX_ROSTER_SIZE {
                return Err(BattleError::RosterTooLarge {
                    side,
                    size: roster.len(),
                });
            }
        }

        Ok(Self {
            player: player.to_vec(),
            opponent: opponent.to_vec(),
        })
    }

    pub fn roster(&self, side: Side) -> &[Creature] {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn player(&self) -> &[Creature] {
        &self.player
    }

    pub fn opponent(&self) -> &[Creature] {
        &self.opponent
    }

    /// Creature at a send-out slot
    pub fn get(&self, side: Side, slot: usize) -> Option<&Creature> {
        self.roster(side).get(slot)
    }

    /// First creature on a side with the given id
    pub fn find(&self, side: Side, id: CreatureId) -> Option<&Creature> {
        self.roster(side).iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseStats;

    fn creature(id: CreatureId) -> Creature {
        Creature::new(id, format!("mon{id}"), BaseStats::new())
    }

    #[test]
    fn test_snapshot_copies_rosters() {
        let mut player = vec![creature(1), creature(2)];
        let opponent = vec![creature(3)];

        let snapshot = RosterSnapshot::new(&player, &opponent).unwrap();
        player[0].name = "renamed".to_string();

        assert_eq!(snapshot.player()[0].name, "mon1");
        assert_eq!(snapshot.get(Side::Opponent, 0).map(|c| c.id), Some(3));
        assert!(snapshot.get(Side::Opponent, 1).is_none());
        assert_eq!(snapshot.find(Side::Player, 2).map(|c| c.id), Some(2));
    }

    #[test]
    fn test_snapshot_rejects_empty() {
        let roster = vec![creature(1)];

        assert_eq!(
            RosterSnapshot::new(&[], &roster),
            Err(BattleError::EmptyRoster(Side::Player))
        );
        assert_eq!(
            RosterSnapshot::new(&roster, &[]),
            Err(BattleError::EmptyRoster(Side::Opponent))
        );
    }

    #[test]
    fn test_snapshot_rejects_oversized() {
        let big: Vec<Creature> = (1..=7).map(creature).collect();
        let small = vec![creature(1)];

        assert_eq!(
            RosterSnapshot::new(&small, &big),
            Err(BattleError::RosterTooLarge {
                side: Side::Opponent,
                size: 7
            })
        );
    }
}
