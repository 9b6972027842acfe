//! Combat events and animation steps produced by the resolver

use crate::types::{CreatureId, Side};

/// One entry of the combat log
///
/// `side` always names the side the event happens *to*: the attacking side
/// for [`CombatEvent::Attack`], the owner of the creature otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum CombatEvent {
    Info { text: String },
    Round { round: u32 },
    Matchup { player: CreatureId, opponent: CreatureId },
    DuelRound { duel_round: u32 },
    Attack {
        side: Side,
        attacker: CreatureId,
        defender: CreatureId,
        damage: u32,
    },
    HpRemaining { side: Side, creature: CreatureId, hp: u32 },
    Faint { side: Side, creature: CreatureId },
    Switch { side: Side, slot: usize, incoming: CreatureId },
    Result { winner: Side },
}

impl CombatEvent {
    pub fn is_faint_of(&self, side: Side) -> bool {
        matches!(self, CombatEvent::Faint { side: s, .. } if *s == side)
    }
}

/// A replayable step derived from an attack or a switch
///
/// `log_end` is the number of combat events that are visible once this
/// step has been shown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationStep {
    Attack {
        round: u32,
        duel_round: u32,
        side: Side,
        attacker: CreatureId,
        defender: CreatureId,
        damage: u32,
        log_end: usize,
    },
    Switch {
        round: u32,
        duel_round: u32,
        side: Side,
        slot: usize,
        incoming: CreatureId,
        log_end: usize,
    },
}

impl AnimationStep {
    pub fn round(&self) -> u32 {
        match self {
            AnimationStep::Attack { round, .. } | AnimationStep::Switch { round, .. } => *round,
        }
    }

    pub fn log_end(&self) -> usize {
        match self {
            AnimationStep::Attack { log_end, .. } | AnimationStep::Switch { log_end, .. } => {
                *log_end
            }
        }
    }

    pub fn is_switch(&self) -> bool {
        matches!(self, AnimationStep::Switch { .. })
    }
}
