//! Async clients and the arena facade for pokeduel.
//!
//! ```text
//! PokeApiCatalog ──┐
//!                  ├─> Arena ──> resolve ──> ResultRecorder ──> JsonServerStore (/battles)
//! JsonServerStore ─┘     │
//!   (/team)              └─> OpponentGenerator
//! ```
//!
//! [`Arena`] is generic over its [`Catalog`] and its roster/history store,
//! so tests can swap in in-memory fakes. [`PokeduelClient`] is the HTTP
//! flavour used against a real catalog and json-server store.

pub mod arena;
pub mod catalog;
pub mod config;
pub mod error;
pub mod opponent;
pub mod recorder;
pub mod store;

#[cfg(test)]
mod testing;

pub use arena::{Arena, BrowsePage};
pub use catalog::{Catalog, CatalogEntry, CatalogPage, PokeApiCatalog};
pub use config::ClientConfig;
pub use error::ClientError;
pub use opponent::OpponentGenerator;
pub use recorder::ResultRecorder;
pub use store::JsonServerStore;

pub use pokeduel_battle::{Creature, ResolvedBattle, Side};
pub use pokeduel_team::{HistorySummary, MemoryStore, OutcomeFilter, RosterError};

/// Arena talking to a PokeAPI catalog and a json-server store
pub type PokeduelClient = Arena<PokeApiCatalog, JsonServerStore>;

impl PokeduelClient {
    /// Build both HTTP clients from `config`, sharing one connection pool
    pub fn from_config(config: ClientConfig) -> Self {
        let http = reqwest::Client::new();
        Arena::new(
            PokeApiCatalog::with_client(http.clone(), config.catalog_url.clone()),
            JsonServerStore::with_client(http, config.store_url.clone()),
            config,
        )
    }
}
