//! Battle history statistics and filtering

use pokeduel_protocol::{BattleRecord, Winner};
use serde::{Deserialize, Serialize};

/// Aggregate win/loss numbers over a history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    /// Whole percent, rounded half-up; 0 for an empty history
    pub win_rate: u32,
}

impl HistorySummary {
    pub fn from_records(records: &[BattleRecord]) -> Self {
        let total = records.len();
        let wins = records
            .iter()
            .filter(|r| r.winner == Winner::Player)
            .count();

        Self {
            total,
            wins,
            losses: total - wins,
            win_rate: win_rate(wins, total),
        }
    }
}

fn win_rate(wins: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((wins * 200 + total) / (total * 2)) as u32
}

/// Which battles a history view shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeFilter {
    #[default]
    All,
    Victories,
    Defeats,
}

impl OutcomeFilter {
    pub fn from_protocol(s: &str) -> Option<Self> {
        match s {
            "all" => Some(OutcomeFilter::All),
            "victories" => Some(OutcomeFilter::Victories),
            "defeats" => Some(OutcomeFilter::Defeats),
            _ => None,
        }
    }

    pub fn matches(&self, record: &BattleRecord) -> bool {
        match self {
            OutcomeFilter::All => true,
            OutcomeFilter::Victories => record.winner == Winner::Player,
            OutcomeFilter::Defeats => record.winner == Winner::Opponent,
        }
    }

    /// Records passing the filter, order preserved
    pub fn apply<'a>(&self, records: &'a [BattleRecord]) -> Vec<&'a BattleRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Sort by timestamp, most recent first
pub fn sort_newest_first(records: &mut [BattleRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
