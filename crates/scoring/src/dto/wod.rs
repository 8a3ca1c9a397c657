use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{ClockTime, ExerciseTarget, ScoringMode, WodDefinition};

/// Largest cap a judge can register, 99:59.
const MAX_CAP_MINUTES: u32 = 99;

/// Request payload for registering a WOD definition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWodRequest {
    pub wod_id: Option<Uuid>,

    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,

    #[serde(default)]
    pub scoring: ScoringMode,

    pub time_cap: Option<TimeCapRequest>,

    #[validate(length(min = 1, message = "At least one exercise is required"))]
    #[validate(nested)]
    pub exercises: Vec<ExerciseTargetRequest>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct TimeCapRequest {
    pub minutes: u32,
    pub seconds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ExerciseTargetRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Exercise name must be between 1 and 255 characters"
    ))]
    pub exercise: String,

    #[validate(range(min = 1, message = "Target reps must be at least 1"))]
    pub target_reps: u32,
}

/// Response containing a registered WOD
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WodResponse {
    pub wod_id: Uuid,
    pub name: String,
    pub scoring: ScoringMode,
    #[schema(example = "10:00")]
    pub time_cap: Option<String>,
    pub exercises: Vec<ExerciseTarget>,
    pub total_target_reps: u32,
}

impl CreateWodRequest {
    /// Checks that need more than one field at a time
    pub fn validate_time_cap(&self) -> Result<(), &'static str> {
        if let Some(cap) = self.time_cap {
            if cap.minutes > MAX_CAP_MINUTES {
                return Err("Time cap minutes must be between 0 and 99");
            }
            if cap.seconds >= 60 {
                return Err("Time cap seconds must be between 0 and 59");
            }
            if cap.minutes == 0 && cap.seconds == 0 {
                return Err("Time cap must be greater than zero");
            }
        }

        Ok(())
    }

    pub fn into_definition(self) -> WodDefinition {
        WodDefinition {
            wod_id: self.wod_id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            scoring: self.scoring,
            time_cap: self
                .time_cap
                .and_then(|cap| ClockTime::from_minutes_seconds(cap.minutes, cap.seconds)),
            exercises: self
                .exercises
                .into_iter()
                .map(|e| ExerciseTarget {
                    exercise: e.exercise,
                    target_reps: e.target_reps,
                })
                .collect(),
        }
    }
}

impl From<WodDefinition> for WodResponse {
    fn from(wod: WodDefinition) -> Self {
        Self {
            wod_id: wod.wod_id,
            total_target_reps: wod.total_target_reps(),
            name: wod.name,
            scoring: wod.scoring,
            time_cap: wod.time_cap.map(|cap| cap.to_string()),
            exercises: wod.exercises,
        }
    }
}
