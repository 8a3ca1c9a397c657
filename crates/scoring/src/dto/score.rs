use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{ScoreBreakdown, ScoreRecord};

/// Response containing a stored score
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreResponse {
    pub score_id: Uuid,
    pub event_id: Uuid,
    pub category_id: Uuid,
    pub wod_id: Uuid,
    pub athlete_id: Uuid,
    pub summary: String,
    pub breakdown: ScoreBreakdown,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// True when this submission replaced an earlier score.
    #[serde(default)]
    pub updated: bool,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScoreFilter {
    pub category_id: Option<Uuid>,
    pub wod_id: Option<Uuid>,
}

impl ScoreResponse {
    pub fn from_record(record: ScoreRecord, updated: bool) -> Self {
        Self {
            score_id: record.score_id,
            event_id: record.event_id,
            category_id: record.category_id,
            wod_id: record.wod_id,
            athlete_id: record.athlete_id,
            summary: record.breakdown.summary(),
            breakdown: record.breakdown,
            created_at: record.created_at,
            updated_at: record.updated_at,
            updated,
        }
    }
}

impl From<ScoreRecord> for ScoreResponse {
    fn from(record: ScoreRecord) -> Self {
        Self::from_record(record, false)
    }
}
