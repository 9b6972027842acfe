use async_trait::async_trait;
use pokeduel_battle::{LogEntry, Side};

use crate::player::Frame;

/// Receives the output of a paced replay.
///
/// Both methods have default no-op implementations, so you only need to
/// implement the ones you care about.
///
/// # Example
///
/// ```ignore
/// struct Printer;
///
/// #[async_trait]
/// impl ReplayHandler for Printer {
///     async fn on_update(&mut self, frame: &Frame) {
///         for line in &frame.revealed {
///             println!("{}", line.text);
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait ReplayHandler: Send {
    /// Called once per animation step.
    async fn on_update(&mut self, frame: &Frame) {
        let _ = frame;
    }

    /// Called once after the last step, with the full log.
    /// Never called for a cancelled replay.
    async fn on_complete(&mut self, log: &[LogEntry], winner: Side) {
        let _ = (log, winner);
    }
}
