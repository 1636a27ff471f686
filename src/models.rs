use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Authoritative counter document, persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterState {
    pub global_score: u64,
    /// Milliseconds since the Unix epoch.
    pub last_updated: i64,
    #[serde(default)]
    pub daily_stats: BTreeMap<String, u64>,
}

impl CounterState {
    pub fn zero(now_ms: i64) -> Self {
        Self {
            global_score: 0,
            last_updated: now_ms,
            daily_stats: BTreeMap::new(),
        }
    }

    pub fn snapshot(&self) -> ScoreSnapshot {
        ScoreSnapshot {
            global_score: self.global_score,
            last_updated: self.last_updated,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    pub global_score: u64,
    pub last_updated: i64,
}

/// Events accepted from a client, e.g. `{"event":"click"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ClientEvent {
    Click,
    RequestDailyStats,
}

/// Events pushed to clients as `{"event":..,"data":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    InitialData(ScoreSnapshot),
    ScoreUpdate(ScoreSnapshot),
    DailyStatsResponse(BTreeMap<String, u64>),
}
