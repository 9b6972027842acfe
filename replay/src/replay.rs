//! Timer-driven playback

use std::sync::Arc;
use std::time::Duration;

use pokeduel_battle::{AnimationStep, ResolvedBattle};
use tokio::sync::watch;

use crate::error::ReplayError;
use crate::handler::ReplayHandler;
use crate::player::{Completion, DEFAULT_LOG_TAIL, EventPlayer, Tick};

/// Delays between steps of a paced replay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause after an attack step
    pub attack_interval: Duration,
    /// Pause after a switch step
    pub switch_interval: Duration,
    /// Log lines carried by each frame
    pub log_tail: usize,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            attack_interval: Duration::from_secs(2),
            switch_interval: Duration::ZERO,
            log_tail: DEFAULT_LOG_TAIL,
        }
    }
}

impl Pacing {
    /// No pauses at all
    pub fn instant() -> Self {
        Self {
            attack_interval: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn delay_after(&self, step: &AnimationStep) -> Duration {
        match step {
            AnimationStep::Attack { .. } => self.attack_interval,
            AnimationStep::Switch { .. } => self.switch_interval,
        }
    }
}

/// Cancels a running [`Replay`] from anywhere
#[derive(Debug, Clone)]
pub struct ReplayHandle {
    cancel: Arc<watch::Sender<bool>>,
}

impl ReplayHandle {
    /// Stop the replay; calling it again has no effect
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.cancel.borrow()
    }
}

/// Plays a resolved battle back at a fixed pace
///
/// # Example
///
/// ```ignore
/// let replay = Replay::new(battle, Pacing::default());
/// let handle = replay.handle();
///
/// // Cancel from a UI callback, another task, ...
/// tokio::spawn(async move { on_leave_page().await; handle.cancel() });
///
/// let completion = replay.run(&mut handler).await?;
/// ```
pub struct Replay {
    player: EventPlayer,
    pacing: Pacing,
    cancel: Arc<watch::Sender<bool>>,
}

impl Replay {
    pub fn new(battle: ResolvedBattle, pacing: Pacing) -> Self {
        let (cancel, _) = watch::channel(false);
        Self {
            player: EventPlayer::with_log_tail(battle, pacing.log_tail),
            pacing,
            cancel: Arc::new(cancel),
        }
    }

    /// Get a handle that can cancel this replay
    pub fn handle(&self) -> ReplayHandle {
        ReplayHandle {
            cancel: Arc::clone(&self.cancel),
        }
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    /// Run until every step was shown or the replay is cancelled.
    ///
    /// A step is shown first, then the pacing delay for that step elapses
    /// before the next one. Completion follows the delay of the last step.
    pub async fn run<H: ReplayHandler>(mut self, handler: &mut H) -> Result<Completion, ReplayError> {
        let mut cancelled = self.cancel.subscribe();

        loop {
            if *cancelled.borrow() {
                return Err(self.stop());
            }

            let delay = self
                .player
                .upcoming()
                .map(|step| self.pacing.delay_after(step))
                .unwrap_or_default();

            match self.player.advance() {
                Some(Tick::Frame(frame)) => {
                    tracing::trace!(step = frame.step, round = frame.round, "Replay step");
                    handler.on_update(&frame).await;
                }
                Some(Tick::Complete(completion)) => {
                    tracing::debug!(winner = %completion.winner, "Replay complete");
                    handler.on_complete(&completion.log, completion.winner).await;
                    return Ok(completion);
                }
                None => return Err(self.stop()),
            }

            if !delay.is_zero() {
                tokio::select! {
                    _ = tokio::time::sleep(delay) => {}
                    _ = cancelled.wait_for(|c| *c) => {}
                }
            }
        }
    }

    fn stop(&mut self) -> ReplayError {
        self.player.cancel();
        let at_step = self.player.position();
        tracing::debug!(at_step, "Replay cancelled");
        ReplayError::Cancelled { at_step }
    }
}
