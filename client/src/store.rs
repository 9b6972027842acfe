//! Roster and history persisted in a json-server instance
//!
//! The store exposes two collections: `/team` holds roster entries and
//! `/battles` holds finished battle records.

use async_trait::async_trait;
use pokeduel_battle::{Creature, CreatureId};
use pokeduel_protocol::{BattleRecord, StoredCreature};
use pokeduel_team::{HistoryStore, RosterError, RosterStore, check_can_add};
use reqwest::{StatusCode, header};

#[derive(Debug, Clone)]
pub struct JsonServerStore {
    http: reqwest::Client,
    base_url: String,
}

fn failure(e: impl std::fmt::Display) -> RosterError {
    RosterError::PersistenceFailure(e.to_string())
}

impl JsonServerStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// GET a collection, bypassing any intermediate cache
    async fn get_fresh(&self, path: &str) -> Result<String, RosterError> {
        let response = self
            .http
            .get(self.url(path))
            .header(header::CACHE_CONTROL, "no-cache, no-store, must-revalidate")
            .header(header::PRAGMA, "no-cache")
            .send()
            .await
            .map_err(failure)?
            .error_for_status()
            .map_err(failure)?;

        response.text().await.map_err(failure)
    }
}

#[async_trait]
impl RosterStore for JsonServerStore {
    async fn roster(&self) -> Result<Vec<Creature>, RosterError> {
        let body = self.get_fresh("team").await?;
        let stored: Vec<StoredCreature> = serde_json::from_str(&body).map_err(failure)?;
        Ok(stored.iter().map(Creature::from_stored).collect())
    }

    async fn add_to_roster(&self, creature: Creature) -> Result<(), RosterError> {
        let roster = self.roster().await?;
        check_can_add(&roster, &creature)?;

        self.http
            .post(self.url("team"))
            .json(&creature.to_stored())
            .send()
            .await
            .map_err(failure)?
            .error_for_status()
            .map_err(failure)?;

        tracing::debug!(id = creature.id, name = %creature.name, "Added to roster");
        Ok(())
    }

    async fn remove_from_roster(&self, id: CreatureId) -> Result<(), RosterError> {
        let response = self
            .http
            .delete(self.url(&format!("team/{id}")))
            .send()
            .await
            .map_err(failure)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RosterError::NotFound(id));
        }
        response.error_for_status().map_err(failure)?;
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for JsonServerStore {
    async fn append_battle_result(&self, record: BattleRecord) -> Result<(), RosterError> {
        self.http
            .post(self.url("battles"))
            .json(&record)
            .send()
            .await
            .map_err(failure)?
            .error_for_status()
            .map_err(failure)?;
        Ok(())
    }

    async fn list_battle_results(&self) -> Result<Vec<BattleRecord>, RosterError> {
        let body = self.get_fresh("battles").await?;
        BattleRecord::parse_list(&body).map_err(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let store = JsonServerStore::new("http://localhost:3001/");
        assert_eq!(store.url("team"), "http://localhost:3001/team");
        assert_eq!(store.url("battles"), "http://localhost:3001/battles");
    }

    #[tokio::test]
    async fn test_unreachable_store_is_persistence_failure() {
        // Port 9 (discard) is not expected to run an HTTP server
        let store = JsonServerStore::new("http://127.0.0.1:9");
        assert!(matches!(
            store.roster().await,
            Err(RosterError::PersistenceFailure(_))
        ));
    }
}
