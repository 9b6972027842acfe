//! Persistence of finished battles

use pokeduel_battle::BattleResult;
use pokeduel_team::{HistoryStore, RosterError};

/// Hands finished battles to the history store
///
/// A failed write is logged and reported to the caller, but the battle
/// itself stands: nothing is retried or rolled back.
pub struct ResultRecorder<'a, H: ?Sized> {
    history: &'a H,
}

impl<'a, H: HistoryStore + ?Sized> ResultRecorder<'a, H> {
    pub fn new(history: &'a H) -> Self {
        Self { history }
    }

    pub async fn record(&self, result: &BattleResult) -> Result<(), RosterError> {
        let record = result.to_record();

        match self.history.append_battle_result(record).await {
            Ok(()) => {
                tracing::info!(
                    winner = %result.winner,
                    timestamp = %result.timestamp,
                    "Battle recorded"
                );
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, winner = %result.winner, "Failed to record battle");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pokeduel_battle::{BaseStats, Creature, RosterSnapshot, resolve};
    use pokeduel_protocol::{BattleRecord, Winner};
    use pokeduel_team::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn result() -> BattleResult {
        let mut strong = BaseStats::new();
        strong.hp = 50;
        strong.attack = 30;
        strong.speed = 9;
        let mut weak = BaseStats::new();
        weak.hp = 20;
        weak.attack = 5;
        weak.speed = 3;

        let snapshot = RosterSnapshot::new(
            &[Creature::new(150, "mewtwo", strong)],
            &[Creature::new(129, "magikarp", weak)],
        )
        .unwrap();
        resolve(&snapshot, &mut StdRng::seed_from_u64(0))
            .result_at("2024-02-29T08:00:00Z".parse().unwrap())
    }

    struct BrokenHistory;

    #[async_trait]
    impl HistoryStore for BrokenHistory {
        async fn append_battle_result(&self, _record: BattleRecord) -> Result<(), RosterError> {
            Err(RosterError::PersistenceFailure("disk full".to_string()))
        }

        async fn list_battle_results(&self) -> Result<Vec<BattleRecord>, RosterError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_record_appends_full_record() {
        let store = MemoryStore::new();
        let result = result();

        ResultRecorder::new(&store).record(&result).await.unwrap();

        let history = store.list_battle_results().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].winner, Winner::Player);
        assert_eq!(history[0].date, result.timestamp);
        assert_eq!(history[0].player_team[0].name, "mewtwo");
        assert_eq!(history[0].log.len(), result.events.len());
        assert_eq!(history[0].log.last().unwrap().text, "You won the battle!");
    }

    #[tokio::test]
    async fn test_record_failure_is_reported() {
        let err = ResultRecorder::new(&BrokenHistory)
            .record(&result())
            .await
            .unwrap_err();

        assert_eq!(err, RosterError::PersistenceFailure("disk full".to_string()));
    }
}
