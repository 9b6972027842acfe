//! Display text for combat events

use pokeduel_protocol::{LogEntry, LogKind};

use crate::event::CombatEvent;
use crate::roster::RosterSnapshot;
use crate::types::{Creature, CreatureId, Side};

/// Render every event of a battle fought with `snapshot`
pub fn render_log(events: &[CombatEvent], snapshot: &RosterSnapshot) -> Vec<LogEntry> {
    render_with_rosters(events, snapshot.player(), snapshot.opponent())
}

pub(crate) fn render_with_rosters(
    events: &[CombatEvent],
    player: &[Creature],
    opponent: &[Creature],
) -> Vec<LogEntry> {
    let names = Names { player, opponent };
    events.iter().map(|e| names.render(e)).collect()
}

struct Names<'a> {
    player: &'a [Creature],
    opponent: &'a [Creature],
}

impl Names<'_> {
    fn of(&self, side: Side, id: CreatureId) -> String {
        let roster = match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        };
        roster
            .iter()
            .find(|c| c.id == id)
            .map_or_else(|| format!("#{id}"), Creature::log_name)
    }

    fn render(&self, event: &CombatEvent) -> LogEntry {
        match event {
            CombatEvent::Info { text } => LogEntry::new(text.clone(), LogKind::Info),
            CombatEvent::Round { round } => LogEntry::new(format!("Round {round}"), LogKind::Round),
            CombatEvent::Matchup { player, opponent } => LogEntry::new(
                format!(
                    "{} vs {}",
                    self.of(Side::Player, *player),
                    self.of(Side::Opponent, *opponent)
                ),
                LogKind::Matchup,
            ),
            CombatEvent::DuelRound { duel_round } => {
                LogEntry::new(format!("Duel round {duel_round}"), LogKind::DuelRound)
            }
            CombatEvent::Attack {
                side,
                attacker,
                damage,
                ..
            } => LogEntry::new(
                format!("{} attacks for {damage} damage!", self.of(*side, *attacker)),
                per_side(*side, LogKind::PlayerAttack, LogKind::EnemyAttack),
            ),
            CombatEvent::HpRemaining { side, creature, hp } => LogEntry::new(
                format!("{} has {hp} HP left.", self.of(*side, *creature)),
                per_side(*side, LogKind::PlayerHp, LogKind::EnemyHp),
            ),
            CombatEvent::Faint { side, creature } => LogEntry::new(
                format!("{} fainted!", self.of(*side, *creature)),
                per_side(*side, LogKind::PlayerFaint, LogKind::EnemyFaint),
            ),
            CombatEvent::Switch { side, incoming, .. } => {
                let name = self.of(*side, *incoming);
                match side {
                    Side::Player => LogEntry::new(format!("Go, {name}!"), LogKind::PlayerSwitch),
                    Side::Opponent => {
                        LogEntry::new(format!("Enemy sends out {name}!"), LogKind::EnemySwitch)
                    }
                }
            }
            CombatEvent::Result { winner } => {
                let text = match winner {
                    Side::Player => "You won the battle!",
                    Side::Opponent => "You lost the battle!",
                };
                LogEntry::new(text, LogKind::Result)
            }
        }
    }
}

fn per_side(side: Side, player: LogKind, opponent: LogKind) -> LogKind {
    match side {
        Side::Player => player,
        Side::Opponent => opponent,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::resolver::resolve;
    use crate::types::BaseStats;

    fn creature(id: CreatureId, name: &str, hp: u32, attack: u32, speed: u32) -> Creature {
        let mut stats = BaseStats::new();
        stats.hp = hp;
        stats.attack = attack;
        stats.speed = speed;
        Creature::new(id, name, stats)
    }

    fn texts(entries: &[LogEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.text.as_str()).collect()
    }

    #[test]
    fn test_render_single_matchup() {
        let snapshot = RosterSnapshot::new(
            &[creature(25, "pikachu", 20, 10, 10)],
            &[creature(1, "bulbasaur", 15, 5, 5)],
        )
        .unwrap();
        let battle = resolve(&snapshot, &mut StdRng::seed_from_u64(0));

        let log = render_log(&battle.events, &snapshot);

        assert_eq!(
            texts(&log),
            vec![
                "Battle started!",
                "Round 1",
                "PIKACHU vs BULBASAUR",
                "Duel round 1",
                "PIKACHU attacks for 10 damage!",
                "BULBASAUR has 5 HP left.",
                "BULBASAUR attacks for 5 damage!",
                "PIKACHU has 15 HP left.",
                "Duel round 2",
                "PIKACHU attacks for 10 damage!",
                "BULBASAUR fainted!",
                "You won the battle!",
            ]
        );
        assert_eq!(log[4].kind, LogKind::PlayerAttack);
        assert_eq!(log[5].kind, LogKind::EnemyHp);
        assert_eq!(log[6].kind, LogKind::EnemyAttack);
        assert_eq!(log[10].kind, LogKind::EnemyFaint);
        assert_eq!(log[11].kind, LogKind::Result);
    }

    #[test]
    fn test_render_switches() {
        let player = [creature(4, "charmander", 1, 1, 1)];
        let opponent = [creature(7, "squirtle", 10, 10, 10), creature(8, "wartortle", 10, 10, 10)];
        let snapshot = RosterSnapshot::new(&player, &opponent).unwrap();

        let events = [
            CombatEvent::Switch {
                side: Side::Player,
                slot: 0,
                incoming: 4,
            },
            CombatEvent::Switch {
                side: Side::Opponent,
                slot: 1,
                incoming: 8,
            },
            CombatEvent::Result {
                winner: Side::Opponent,
            },
        ];

        let log = render_log(&events, &snapshot);

        assert_eq!(
            texts(&log),
            vec!["Go, CHARMANDER!", "Enemy sends out WARTORTLE!", "You lost the battle!"]
        );
        assert_eq!(log[0].kind, LogKind::PlayerSwitch);
        assert_eq!(log[1].kind, LogKind::EnemySwitch);
    }

    #[test]
    fn test_names_resolve_per_side() {
        // Both rosters may hold the same id
        let snapshot = RosterSnapshot::new(
            &[creature(1, "mr-mime", 10, 1, 1)],
            &[creature(1, "ditto", 10, 1, 1)],
        )
        .unwrap();

        let log = render_log(
            &[CombatEvent::Matchup {
                player: 1,
                opponent: 1,
            }],
            &snapshot,
        );

        assert_eq!(log[0].text, "MR-MIME vs DITTO");
    }

    #[test]
    fn test_unknown_creature_falls_back_to_id() {
        let snapshot = RosterSnapshot::new(
            &[creature(1, "a", 10, 1, 1)],
            &[creature(2, "b", 10, 1, 1)],
        )
        .unwrap();

        let log = render_log(
            &[CombatEvent::Faint {
                side: Side::Opponent,
                creature: 99,
            }],
            &snapshot,
        );

        assert_eq!(log[0].text, "#99 fainted!");
    }
}
