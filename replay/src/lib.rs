//! Playback of resolved pokeduel battles.
//!
//! Resolution computes the whole battle up front. This crate shows it again
//! one animation step at a time:
//!
//! - [`EventPlayer`] - a synchronous state machine; call `advance()` to get
//!   the next [`Frame`], then a final [`Completion`]
//! - [`Replay`] - drives an `EventPlayer` on tokio timers according to a
//!   [`Pacing`] and reports to a [`ReplayHandler`]; a [`ReplayHandle`]
//!   cancels it
//!
//! A frame never changes the battle: the log and the winner are fixed
//! before the first step is shown.

pub mod error;
pub mod handler;
pub mod player;
pub mod replay;

pub use error::ReplayError;
pub use handler::ReplayHandler;
pub use player::{
    ActiveView, AttackView, Completion, DEFAULT_LOG_TAIL, EventPlayer, Frame, PlayerState, Tick,
};
pub use replay::{Pacing, Replay, ReplayHandle};
