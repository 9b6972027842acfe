//! Catalog, roster store and history tied together

use chrono::Utc;
use futures_util::future::try_join_all;
use pokeduel_battle::{Creature, CreatureId, ResolvedBattle, RosterSnapshot, resolve};
use pokeduel_protocol::BattleRecord;
use pokeduel_team::{
    HistoryStore, HistorySummary, OutcomeFilter, RosterError, RosterStore, has_room,
    sort_newest_first,
};
use rand::Rng;

use crate::catalog::{Catalog, lookup_key};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::opponent::OpponentGenerator;
use crate::recorder::ResultRecorder;

/// One page of fully fetched catalog creatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowsePage {
    /// 1-based page number
    pub page: usize,
    pub total_pages: usize,
    pub creatures: Vec<Creature>,
}

/// Entry point for building a roster and fighting battles
///
/// # Example
///
/// ```ignore
/// let arena = PokeduelClient::from_config(ClientConfig::from_env());
///
/// arena.add_to_roster("pikachu").await?;
/// let opponent = arena.generate_opponent(&mut rand::thread_rng()).await?;
/// let battle = arena.battle(&opponent, &mut rand::thread_rng()).await?;
/// println!("Winner: {}", battle.winner);
/// ```
pub struct Arena<C, S> {
    catalog: C,
    store: S,
    config: ClientConfig,
}

impl<C, S> Arena<C, S>
where
    C: Catalog,
    S: RosterStore + HistoryStore,
{
    pub fn new(catalog: C, store: S, config: ClientConfig) -> Self {
        Self {
            catalog,
            store,
            config,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look a creature up by exact name (case-insensitive) or id
    pub async fn search(&self, name: &str) -> Result<Creature, ClientError> {
        self.catalog.get_creature(&lookup_key(name)).await
    }

    /// Fetch one page of the catalog with full records
    ///
    /// Pages are 1-based; page 0 is treated as page 1.
    pub async fn browse(&self, page: usize) -> Result<BrowsePage, ClientError> {
        let page = page.max(1);
        let limit = self.config.page_size;
        let listing = self
            .catalog
            .list_creatures((page - 1) * limit, limit)
            .await?;

        let fetches = listing.items.iter().map(|entry| {
            let key = entry
                .id
                .map_or_else(|| entry.name.clone(), |id| id.to_string());
            async move { self.catalog.get_creature(&key).await }
        });
        let creatures = try_join_all(fetches).await?;

        Ok(BrowsePage {
            page,
            total_pages: listing.total_pages(limit),
            creatures,
        })
    }

    pub async fn roster(&self) -> Result<Vec<Creature>, ClientError> {
        Ok(self.store.roster().await?)
    }

    /// Fetch a creature from the catalog and add it to the roster
    pub async fn add_to_roster(&self, id_or_name: &str) -> Result<Creature, ClientError> {
        // Skip the catalog round trip when the roster cannot take anyone
        if !has_room(&self.store.roster().await?) {
            return Err(RosterError::RosterFull.into());
        }

        let creature = self.catalog.get_creature(id_or_name).await?;
        self.store.add_to_roster(creature.clone()).await?;
        tracing::info!(id = creature.id, name = %creature.name, "Creature joined the roster");
        Ok(creature)
    }

    pub async fn remove_from_roster(&self, id: CreatureId) -> Result<(), ClientError> {
        self.store.remove_from_roster(id).await?;
        Ok(())
    }

    /// Draw a random opponent roster from the catalog
    pub async fn generate_opponent<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<Creature>, ClientError> {
        OpponentGenerator::new(
            &self.catalog,
            self.config.max_creature_id,
            self.config.opponent_size,
        )
        .generate(rng)
        .await
    }

    /// Fight the stored roster against `opponent`
    ///
    /// The result is written to the history before returning; a failed
    /// write is logged and does not affect the returned battle.
    pub async fn battle<R: Rng + ?Sized>(
        &self,
        opponent: &[Creature],
        rng: &mut R,
    ) -> Result<ResolvedBattle, ClientError> {
        let roster = self.roster().await?;
        let snapshot = RosterSnapshot::new(&roster, opponent)?;

        let battle = resolve(&snapshot, rng);
        let result = battle.result_at(Utc::now());
        let _ = ResultRecorder::new(&self.store).record(&result).await;

        Ok(battle)
    }

    /// Stored battles, most recent first
    pub async fn history(&self) -> Result<Vec<BattleRecord>, ClientError> {
        let mut records = self.store.list_battle_results().await?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Stored battles passing `filter`, most recent first
    pub async fn filtered_history(
        &self,
        filter: OutcomeFilter,
    ) -> Result<Vec<BattleRecord>, ClientError> {
        let records = self.history().await?;
        Ok(records.into_iter().filter(|r| filter.matches(r)).collect())
    }

    pub async fn history_summary(&self) -> Result<HistorySummary, ClientError> {
        let records = self.store.list_battle_results().await?;
        Ok(HistorySummary::from_records(&records))
    }
}
