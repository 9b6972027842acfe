//! Synchronous event player
//!
//! [`EventPlayer`] walks the animation steps of a resolved battle one at a
//! time. It owns no timer: whoever drives it decides when to call
//! [`EventPlayer::advance`].

use pokeduel_battle::{AnimationStep, CreatureId, LogEntry, ResolvedBattle, Side};

/// Lines of log shown alongside each frame by default
pub const DEFAULT_LOG_TAIL: usize = 3;

/// The creature currently out on one side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveView {
    /// Roster slot
    pub slot: usize,
    pub creature: CreatureId,
    /// Upper-cased display name
    pub name: String,
    /// Displayed hp, from the replayed attacks so far
    pub hp: u32,
    pub max_hp: u32,
}

/// The attack being shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackView {
    /// Attacking side
    pub side: Side,
    pub attacker: CreatureId,
    pub defender: CreatureId,
    pub damage: u32,
}

/// What a host shows after one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Index of the step just applied
    pub step: usize,
    pub total_steps: usize,
    pub round: u32,
    pub player: ActiveView,
    pub opponent: ActiveView,
    /// `None` for switch steps
    pub attack: Option<AttackView>,
    /// Log lines made visible by this step
    pub revealed: Vec<LogEntry>,
    /// The most recent visible log lines, oldest first
    pub recent_log: Vec<LogEntry>,
}

impl Frame {
    pub fn active(&self, side: Side) -> &ActiveView {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}

/// Final state handed over once every step was shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Full, untruncated log
    pub log: Vec<LogEntry>,
    pub winner: Side,
}

/// Result of one [`EventPlayer::advance`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    Frame(Frame),
    Complete(Completion),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Finished,
    Cancelled,
}

/// Replays the animation steps of one battle
///
/// A player is single-use: once finished or cancelled it never produces
/// another tick. Start a new battle with a new player.
#[derive(Debug)]
pub struct EventPlayer {
    battle: ResolvedBattle,
    log: Vec<LogEntry>,
    next_step: usize,
    visible: usize,
    active: [ActiveView; 2],
    log_tail: usize,
    state: PlayerState,
}

impl EventPlayer {
    pub fn new(battle: ResolvedBattle) -> Self {
        Self::with_log_tail(battle, DEFAULT_LOG_TAIL)
    }

    pub fn with_log_tail(battle: ResolvedBattle, log_tail: usize) -> Self {
        let log = battle.log();
        let active = [
            lead_view(&battle, Side::Player),
            lead_view(&battle, Side::Opponent),
        ];

        Self {
            battle,
            log,
            next_step: 0,
            visible: 0,
            active,
            log_tail,
            state: PlayerState::Playing,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn battle(&self) -> &ResolvedBattle {
        &self.battle
    }

    /// Index of the next step to apply
    pub fn position(&self) -> usize {
        self.next_step
    }

    /// The step the next [`advance`](Self::advance) will apply
    pub fn upcoming(&self) -> Option<&AnimationStep> {
        match self.state {
            PlayerState::Playing => self.battle.steps.get(self.next_step),
            _ => None,
        }
    }

    pub fn active(&self, side: Side) -> &ActiveView {
        &self.active[side.index()]
    }

    /// Apply the next step, or finish once all steps are shown
    ///
    /// Returns `None` after finishing or cancellation.
    pub fn advance(&mut self) -> Option<Tick> {
        if self.state != PlayerState::Playing {
            return None;
        }

        let Some(step) = self.battle.steps.get(self.next_step).cloned() else {
            self.state = PlayerState::Finished;
            self.visible = self.log.len();
            return Some(Tick::Complete(Completion {
                log: self.log.clone(),
                winner: self.battle.winner,
            }));
        };

        let attack = match step {
            AnimationStep::Attack {
                side,
                attacker,
                defender,
                damage,
                ..
            } => {
                let target = &mut self.active[side.opposite().index()];
                target.hp = target.hp.saturating_sub(damage);
                Some(AttackView {
                    side,
                    attacker,
                    defender,
                    damage,
                })
            }
            AnimationStep::Switch { side, slot, .. } => {
                if let Some(view) = slot_view(&self.battle, side, slot) {
                    self.active[side.index()] = view;
                }
                None
            }
        };

        let end = step.log_end().min(self.log.len()).max(self.visible);
        let revealed = self.log[self.visible..end].to_vec();
        self.visible = end;

        let frame = Frame {
            step: self.next_step,
            total_steps: self.battle.steps.len(),
            round: step.round(),
            player: self.active[Side::Player.index()].clone(),
            opponent: self.active[Side::Opponent.index()].clone(),
            attack,
            revealed,
            recent_log: self.log[end.saturating_sub(self.log_tail)..end].to_vec(),
        };
        self.next_step += 1;

        Some(Tick::Frame(frame))
    }

    /// Stop for good; idempotent, and a no-op once finished
    pub fn cancel(&mut self) {
        if self.state == PlayerState::Playing {
            self.state = PlayerState::Cancelled;
        }
    }
}

fn slot_view(battle: &ResolvedBattle, side: Side, slot: usize) -> Option<ActiveView> {
    battle.snapshot.get(side, slot).map(|c| ActiveView {
        slot,
        creature: c.id,
        name: c.log_name(),
        hp: c.stats.hp,
        max_hp: c.stats.hp,
    })
}

fn lead_view(battle: &ResolvedBattle, side: Side) -> ActiveView {
    // Snapshots are never empty
    slot_view(battle, side, 0).unwrap_or(ActiveView {
        slot: 0,
        creature: 0,
        name: String::new(),
        hp: 0,
        max_hp: 0,
    })
}
