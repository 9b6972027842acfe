//! Payloads of the roster/history store (`/team` and `/battles`)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// `{ name, value }` stat pair of a stored roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: u32,
}

/// A creature as persisted in the roster store and inside battle records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCreature {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl StoredCreature {
    /// Value of a stat by name, 0 when absent
    pub fn stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|s| s.name == name)
            .map_or(0, |s| s.value)
    }
}

/// Which side won a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Opponent,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::Player => "player",
            Winner::Opponent => "opponent",
        }
    }
}

/// Presentation category of a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LogKind {
    Info,
    Round,
    Matchup,
    DuelRound,
    PlayerAttack,
    EnemyAttack,
    PlayerHp,
    EnemyHp,
    PlayerFaint,
    EnemyFaint,
    PlayerSwitch,
    EnemySwitch,
    Result,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::Info => "info",
            LogKind::Round => "round",
            LogKind::Matchup => "matchup",
            LogKind::DuelRound => "duel-round",
            LogKind::PlayerAttack => "player-attack",
            LogKind::EnemyAttack => "enemy-attack",
            LogKind::PlayerHp => "player-hp",
            LogKind::EnemyHp => "enemy-hp",
            LogKind::PlayerFaint => "player-faint",
            LogKind::EnemyFaint => "enemy-faint",
            LogKind::PlayerSwitch => "player-switch",
            LogKind::EnemySwitch => "enemy-switch",
            LogKind::Result => "result",
        }
    }
}

/// One rendered line of a battle log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: LogKind,
}

impl LogEntry {
    pub fn new(text: impl Into<String>, kind: LogKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// A finished battle as stored in the history (`POST /battles`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleRecord {
    pub date: DateTime<Utc>,
    pub player_team: Vec<StoredCreature>,
    pub opponent_team: Vec<StoredCreature>,
    pub winner: Winner,
    #[serde(default)]
    pub log: Vec<LogEntry>,
}

impl BattleRecord {
    /// Parse a list of records as returned by `GET /battles`
    pub fn parse_list(body: &str) -> Result<Vec<BattleRecord>, ParseError> {
        if body.trim().is_empty() {
            return Err(ParseError::EmptyPayload);
        }
        Ok(serde_json::from_str(body)?)
    }

    pub fn to_json(&self) -> Result<String, ParseError> {
        Ok(serde_json::to_string(self)?)
    }
}
