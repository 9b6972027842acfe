use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Replay cancelled before step {at_step}")]
    Cancelled { at_step: usize },
}
