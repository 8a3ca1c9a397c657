use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::ClockTime;

/// A judge's score sheet for one athlete on one WOD, exactly as entered.
///
/// Nothing here is trusted yet; see [`crate::services::validation`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RawScoreSubmission {
    pub event_id: Uuid,
    pub category_id: Uuid,
    pub wod_id: Uuid,
    pub athlete_id: Uuid,
    /// One entry per WOD exercise, in WOD order.
    pub exercises: Vec<ExerciseResult>,
    #[schema(example = "08:45")]
    pub completion_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResult {
    pub completed: bool,
    /// Reps reached before the cap. Required when `completed` is false.
    #[serde(default)]
    pub max_reps: Option<i64>,
}

impl ExerciseResult {
    pub fn completed() -> Self {
        Self {
            completed: true,
            max_reps: None,
        }
    }

    pub fn incomplete(max_reps: i64) -> Self {
        Self {
            completed: false,
            max_reps: Some(max_reps),
        }
    }
}

/// Outcome of one exercise once a submission has been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExerciseSlot {
    Completed,
    Incomplete { max_reps: u32 },
}

impl ExerciseSlot {
    pub fn is_completed(&self) -> bool {
        matches!(self, ExerciseSlot::Completed)
    }

    /// Reps credited for this exercise given its target.
    pub fn credited_reps(&self, target_reps: u32) -> u32 {
        match self {
            ExerciseSlot::Completed => target_reps,
            ExerciseSlot::Incomplete { max_reps } => *max_reps,
        }
    }
}

/// A submission that passed validation. Only the validator builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptedSubmission {
    event_id: Uuid,
    category_id: Uuid,
    wod_id: Uuid,
    athlete_id: Uuid,
    slots: Vec<ExerciseSlot>,
    completion_time: ClockTime,
}

impl AcceptedSubmission {
    pub(crate) fn new(
        raw: &RawScoreSubmission,
        slots: Vec<ExerciseSlot>,
        completion_time: ClockTime,
    ) -> Self {
        Self {
            event_id: raw.event_id,
            category_id: raw.category_id,
            wod_id: raw.wod_id,
            athlete_id: raw.athlete_id,
            slots,
            completion_time,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn wod_id(&self) -> Uuid {
        self.wod_id
    }

    pub fn athlete_id(&self) -> Uuid {
        self.athlete_id
    }

    pub fn slots(&self) -> &[ExerciseSlot] {
        &self.slots
    }

    pub fn completion_time(&self) -> ClockTime {
        self.completion_time
    }

    pub fn all_completed(&self) -> bool {
        self.slots.iter().all(ExerciseSlot::is_completed)
    }
}
