use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{LeaderboardEntry, ScoreBreakdown, StandingsEntry};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    pub event_id: Uuid,
    pub category_id: Uuid,
    pub wod_id: Uuid,
    pub wod_name: String,
    pub entries: Vec<LeaderboardRow>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub athlete_id: Uuid,
    /// Finish time, or reps and exercises done for athletes who hit the cap
    pub summary: String,
    pub breakdown: ScoreBreakdown,
}

impl From<LeaderboardEntry> for LeaderboardRow {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            athlete_id: entry.athlete_id,
            summary: entry.breakdown.summary(),
            breakdown: entry.breakdown,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StandingsResponse {
    pub event_id: Uuid,
    pub category_id: Uuid,
    pub wods_counted: u32,
    pub entries: Vec<StandingsEntry>,
}
