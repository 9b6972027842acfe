//! Roster rules, stores and battle history for pokeduel.
//!
//! A roster holds at most six creatures with no repeated id. Every store
//! enforces that through [`check_can_add`], so a rejected add never
//! changes the stored roster.
//!
//! ```ignore
//! use pokeduel_team::{MemoryStore, RosterStore, HistorySummary, HistoryStore};
//!
//! let store = MemoryStore::new();
//! store.add_to_roster(pikachu).await?;
//!
//! let history = store.list_battle_results().await?;
//! println!("Win rate: {}%", HistorySummary::from_records(&history).win_rate);
//! ```

pub mod error;
pub mod history;
pub mod rules;
pub mod store;

pub use error::RosterError;
pub use history::{HistorySummary, OutcomeFilter, sort_newest_first};
pub use rules::{check_can_add, has_room};
pub use store::{HistoryStore, MemoryStore, RosterStore};
