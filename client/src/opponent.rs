//! Random opponent rosters

use futures_util::future::try_join_all;
use pokeduel_battle::{Creature, CreatureId, MAX_ROSTER_SIZE};
use rand::Rng;

use crate::catalog::Catalog;
use crate::error::ClientError;

/// Draws random rosters from a catalog
pub struct OpponentGenerator<'a, C: ?Sized> {
    catalog: &'a C,
    max_id: CreatureId,
    size: usize,
}

impl<'a, C: Catalog + ?Sized> OpponentGenerator<'a, C> {
    /// Ids are drawn from `1..=max_id`; `size` is capped at the roster limit
    pub fn new(catalog: &'a C, max_id: CreatureId, size: usize) -> Self {
        Self {
            catalog,
            max_id: max_id.max(1),
            size: size.min(MAX_ROSTER_SIZE),
        }
    }

    /// Draw the ids of one roster; repeats are allowed
    pub fn draw_ids<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<CreatureId> {
        (0..self.size)
            .map(|_| rng.gen_range(1..=self.max_id))
            .collect()
    }

    /// Draw and fetch a full roster
    ///
    /// Any failed fetch fails the whole roster; nothing partial is returned.
    pub async fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Creature>, ClientError> {
        let ids = self.draw_ids(rng);
        self.fetch_all(&ids).await
    }

    /// Fetch the given ids concurrently, in order
    pub async fn fetch_all(&self, ids: &[CreatureId]) -> Result<Vec<Creature>, ClientError> {
        let fetches = ids.iter().map(|&id| async move {
            self.catalog
                .get_creature(&id.to_string())
                .await
                .inspect_err(|e| tracing::warn!(id, error = %e, "Opponent fetch failed"))
        });

        let roster = try_join_all(fetches).await?;
        tracing::debug!(?ids, "Generated opponent roster");
        Ok(roster)
    }
}
