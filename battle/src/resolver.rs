//! Turn resolution
//!
//! Resolution runs to completion in one call and only touches its own
//! working copies of the two rosters. Damage is the attacker's raw attack
//! stat: defense, type matchups and randomness play no part. The one random
//! element is the coin flip deciding who strikes first on a speed tie, which
//! draws from the caller-supplied generator.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use pokeduel_protocol::LogEntry;
use rand::Rng;

use crate::event::{AnimationStep, CombatEvent};
use crate::log::render_log;
use crate::result::BattleResult;
use crate::roster::RosterSnapshot;
use crate::types::{Creature, CreatureId, Side};

/// Text of the informational event opening every log
pub const BATTLE_STARTED: &str = "Battle started!";

/// A fully resolved battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBattle {
    /// The rosters the battle was fought with
    pub snapshot: RosterSnapshot,

    /// Complete ordered combat log, ending with [`CombatEvent::Result`]
    pub events: Vec<CombatEvent>,

    /// One step per attack and per switch, in log order
    pub steps: Vec<AnimationStep>,

    pub winner: Side,
}

impl ResolvedBattle {
    /// Render the combat log as display lines
    pub fn log(&self) -> Vec<LogEntry> {
        render_log(&self.events, &self.snapshot)
    }

    /// Number of faint events for a side
    pub fn faint_count(&self, side: Side) -> usize {
        self.events.iter().filter(|e| e.is_faint_of(side)).count()
    }

    /// Package the battle as a history result stamped with `timestamp`
    pub fn result_at(&self, timestamp: DateTime<Utc>) -> BattleResult {
        BattleResult {
            timestamp,
            player: self.snapshot.player().to_vec(),
            opponent: self.snapshot.opponent().to_vec(),
            winner: self.winner,
            events: self.events.clone(),
        }
    }
}

/// Resolve a full battle between the two rosters of `snapshot`
pub fn resolve<R: Rng + ?Sized>(snapshot: &RosterSnapshot, rng: &mut R) -> ResolvedBattle {
    let mut resolution = Resolution::new(snapshot, rng);
    let winner = resolution.run();

    tracing::debug!(
        winner = %winner,
        rounds = resolution.round - 1,
        events = resolution.events.len(),
        steps = resolution.steps.len(),
        "Battle resolved"
    );

    ResolvedBattle {
        snapshot: snapshot.clone(),
        events: resolution.events,
        steps: resolution.steps,
        winner,
    }
}

/// Working copy of a roster member
#[derive(Debug, Clone)]
struct Fighter {
    id: CreatureId,
    attack: u32,
    speed: u32,
    base_hp: u32,
    current_hp: Option<u32>,
}

impl Fighter {
    fn from_creature(creature: &Creature) -> Self {
        Self {
            id: creature.id,
            attack: creature.stats.attack,
            speed: creature.stats.speed,
            base_hp: creature.stats.hp,
            current_hp: None,
        }
    }

    /// Current hp, initialised to base hp on first use
    fn hp(&mut self) -> u32 {
        *self.current_hp.get_or_insert(self.base_hp)
    }

    /// Apply damage, returning remaining hp (0 = fainted)
    fn take_damage(&mut self, damage: u32) -> u32 {
        let hp = self.hp().saturating_sub(damage);
        self.current_hp = Some(hp);
        hp
    }
}

/// One side's fighters and the cursor of its active one
#[derive(Debug)]
struct Lineup {
    fighters: Vec<Fighter>,
    cursor: usize,
}

impl Lineup {
    fn new(roster: &[Creature]) -> Self {
        Self {
            fighters: roster.iter().map(Fighter::from_creature).collect(),
            cursor: 0,
        }
    }

    fn exhausted(&self) -> bool {
        self.cursor >= self.fighters.len()
    }

    fn active(&self) -> &Fighter {
        &self.fighters[self.cursor]
    }

    fn active_mut(&mut self) -> &mut Fighter {
        &mut self.fighters[self.cursor]
    }
}

enum Strike {
    Landed,
    Fainted,
}

struct Resolution<'a, R: Rng + ?Sized> {
    lineups: [Lineup; 2],
    events: Vec<CombatEvent>,
    steps: Vec<AnimationStep>,
    rng: &'a mut R,
    round: u32,
    duel_round: u32,
}

impl<'a, R: Rng + ?Sized> Resolution<'a, R> {
    fn new(snapshot: &RosterSnapshot, rng: &'a mut R) -> Self {
        Self {
            lineups: [
                Lineup::new(snapshot.player()),
                Lineup::new(snapshot.opponent()),
            ],
            events: vec![CombatEvent::Info {
                text: BATTLE_STARTED.to_string(),
            }],
            steps: Vec::new(),
            rng,
            round: 1,
            duel_round: 1,
        }
    }

    fn lineup(&self, side: Side) -> &Lineup {
        &self.lineups[side.index()]
    }

    fn lineup_mut(&mut self, side: Side) -> &mut Lineup {
        &mut self.lineups[side.index()]
    }

    fn run(&mut self) -> Side {
        while !self.lineup(Side::Player).exhausted() && !self.lineup(Side::Opponent).exhausted() {
            self.play_matchup();
            self.round += 1;
        }

        let winner = if self.lineup(Side::Player).exhausted() {
            Side::Opponent
        } else {
            Side::Player
        };
        self.events.push(CombatEvent::Result { winner });
        winner
    }

    /// Fight the two active creatures until one of them faints
    fn play_matchup(&mut self) {
        let player = self.lineup(Side::Player).active().id;
        let opponent = self.lineup(Side::Opponent).active().id;

        self.events.push(CombatEvent::Round { round: self.round });
        self.events.push(CombatEvent::Matchup { player, opponent });

        for lineup in &mut self.lineups {
            lineup.active_mut().hp();
        }

        if self.lineups.iter().all(|l| l.active().attack == 0) {
            tracing::warn!(
                round = self.round,
                player,
                opponent,
                "Both active creatures have 0 attack; this matchup cannot end"
            );
        }

        let first = self.first_striker();
        self.duel_round = 1;

        loop {
            self.events.push(CombatEvent::DuelRound {
                duel_round: self.duel_round,
            });

            if let Strike::Fainted = self.strike(first) {
                break;
            }
            if let Strike::Fainted = self.strike(first.opposite()) {
                break;
            }

            self.duel_round += 1;
        }
    }

    /// Faster creature strikes first; a tie is a fair coin flip
    fn first_striker(&mut self) -> Side {
        let player = self.lineup(Side::Player).active().speed;
        let opponent = self.lineup(Side::Opponent).active().speed;

        match player.cmp(&opponent) {
            Ordering::Greater => Side::Player,
            Ordering::Less => Side::Opponent,
            Ordering::Equal => {
                if self.rng.gen_bool(0.5) {
                    Side::Player
                } else {
                    Side::Opponent
                }
            }
        }
    }

    /// `side`'s active creature attacks the other side's active creature
    fn strike(&mut self, side: Side) -> Strike {
        let defending = side.opposite();
        let (attacker, damage) = {
            let fighter = self.lineup(side).active();
            (fighter.id, fighter.attack)
        };

        let target = self.lineup_mut(defending).active_mut();
        let defender = target.id;
        let hp = target.take_damage(damage);

        self.events.push(CombatEvent::Attack {
            side,
            attacker,
            defender,
            damage,
        });

        if hp > 0 {
            self.events.push(CombatEvent::HpRemaining {
                side: defending,
                creature: defender,
                hp,
            });
            self.push_attack_step(side, attacker, defender, damage);
            return Strike::Landed;
        }

        self.events.push(CombatEvent::Faint {
            side: defending,
            creature: defender,
        });
        self.push_attack_step(side, attacker, defender, damage);

        let lineup = self.lineup_mut(defending);
        lineup.cursor += 1;
        let slot = lineup.cursor;
        if let Some(incoming) = lineup.fighters.get(slot).map(|f| f.id) {
            self.events.push(CombatEvent::Switch {
                side: defending,
                slot,
                incoming,
            });
            self.steps.push(AnimationStep::Switch {
                round: self.round,
                duel_round: self.duel_round,
                side: defending,
                slot,
                incoming,
                log_end: self.events.len(),
            });
        }

        Strike::Fainted
    }

    fn push_attack_step(&mut self, side: Side, attacker: CreatureId, defender: CreatureId, damage: u32) {
        self.steps.push(AnimationStep::Attack {
            round: self.round,
            duel_round: self.duel_round,
            side,
            attacker,
            defender,
            damage,
            log_end: self.events.len(),
        });
    }
}
