use pokeduel_battle::BattleError;
use pokeduel_protocol::ParseError;
use pokeduel_team::RosterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Creature not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("Invalid payload: {0}")]
    Parse(#[from] ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::CatalogUnavailable(_) | ClientError::Http(_))
    }
}
