//! Turn resolution and domain types for pokeduel battles.
//!
//! # Overview
//!
//! `pokeduel-battle` sits between `pokeduel-protocol` (data formats) and the
//! components that drive or display a battle:
//!
//! ```text
//! pokeduel-protocol (catalog + store formats)
//!        │
//!        ▼
//! pokeduel-battle (domain types + resolver) ← THIS CRATE
//!        │
//!        ├─> pokeduel-replay (paced playback of animation steps)
//!        ├─> pokeduel-team (roster rules, history)
//!        └─> pokeduel-client (catalog, store, opponent generation)
//! ```
//!
//! # Main Types
//!
//! - [`Creature`], [`BaseStats`], [`Type`] - Roster members as fetched from the catalog
//! - [`RosterSnapshot`] - Two validated rosters, the only input to the resolver
//! - [`CombatEvent`] - One entry of the ordered combat log
//! - [`AnimationStep`] - One attack or switch, consumed by the replay player
//! - [`ResolvedBattle`] - Events, steps and winner of a finished battle
//! - [`BattleResult`] - A finished battle packaged for the history store
//!
//! # Example Usage
//!
//! ```ignore
//! use pokeduel_battle::{RosterSnapshot, resolve};
//! use rand::SeedableRng;
//!
//! let snapshot = RosterSnapshot::new(&player_roster, &opponent_roster)?;
//! let battle = resolve(&snapshot, &mut rand::rngs::StdRng::seed_from_u64(7));
//!
//! for entry in battle.log() {
//!     println!("{}", entry.text);
//! }
//! println!("Winner: {}", battle.winner);
//! ```

pub mod error;
pub mod event;
pub mod log;
pub mod resolver;
pub mod result;
pub mod roster;
pub mod types;

pub use error::BattleError;
pub use event::{AnimationStep, CombatEvent};
pub use log::render_log;
pub use resolver::{BATTLE_STARTED, ResolvedBattle, resolve};
pub use result::BattleResult;
pub use roster::{MAX_ROSTER_SIZE, Roster, RosterSnapshot};
pub use types::{BaseStats, Creature, CreatureId, PLACEHOLDER_ARTWORK, Side, Stat, Type};

// Re-export the persisted log shape
pub use pokeduel_protocol::{LogEntry, LogKind};
