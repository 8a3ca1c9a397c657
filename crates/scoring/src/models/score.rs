use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{RawScoreSubmission, ScoreBreakdown};

/// An accepted score as kept by the persistence side: the sheet the judge
/// entered plus the breakdown derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreRecord {
    pub score_id: Uuid,
    pub event_id: Uuid,
    pub category_id: Uuid,
    pub wod_id: Uuid,
    pub athlete_id: Uuid,
    pub submission: RawScoreSubmission,
    pub breakdown: ScoreBreakdown,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn new(
        submission: RawScoreSubmission,
        breakdown: ScoreBreakdown,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            score_id: Uuid::new_v4(),
            event_id: submission.event_id,
            category_id: submission.category_id,
            wod_id: submission.wod_id,
            athlete_id: submission.athlete_id,
            submission,
            breakdown,
            created_at: now,
            updated_at: now,
        }
    }

    /// Takes over identity and creation time from the record it replaces.
    pub fn replacing(mut self, previous: &ScoreRecord) -> Self {
        self.score_id = previous.score_id;
        self.created_at = previous.created_at;
        self
    }
}
