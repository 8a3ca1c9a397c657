use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::ScoreBreakdown;

/// One athlete's breakdown as fed to the ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AthleteBreakdown {
    pub athlete_id: Uuid,
    pub breakdown: ScoreBreakdown,
}

impl AthleteBreakdown {
    pub fn new(athlete_id: Uuid, breakdown: ScoreBreakdown) -> Self {
        Self {
            athlete_id,
            breakdown,
        }
    }
}

/// A breakdown placed on a WOD leaderboard. Recomputed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub athlete_id: Uuid,
    pub breakdown: ScoreBreakdown,
}

/// An athlete's standing across every WOD of an event category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StandingsEntry {
    pub rank: u32,
    pub athlete_id: Uuid,
    pub total_points: u32,
    pub wods_scored: u32,
}
