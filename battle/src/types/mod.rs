//! Domain types for battle simulation

mod creature;
mod pokemon_type;
mod side;
mod stats;

pub use creature::{Creature, CreatureId, PLACEHOLDER_ARTWORK};
pub use pokemon_type::Type;
pub use side::Side;
pub use stats::{BaseStats, Stat};
