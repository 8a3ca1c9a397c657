use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::ClockTime;
use crate::error::{Result, ScoringError};

/// How scores for a WOD are judged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMode {
    /// Fastest finish wins; unfinished attempts are ranked by work done.
    #[default]
    TimeBased,
    /// Scored outside this engine (judged points, load, etc).
    External,
}

/// One line of a WOD: an exercise and the reps that count as finishing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseTarget {
    pub exercise: String,
    pub target_reps: u32,
}

/// Immutable description of a workout, as handed over by WOD management.
///
/// The order of `exercises` is the canonical exercise index used by
/// submissions and breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WodDefinition {
    pub wod_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub scoring: ScoringMode,
    #[schema(value_type = Option<String>, example = "10:00")]
    pub time_cap: Option<ClockTime>,
    pub exercises: Vec<ExerciseTarget>,
}

impl WodDefinition {
    pub fn is_time_based(&self) -> bool {
        self.scoring == ScoringMode::TimeBased
    }

    /// Rejects definitions that can never score a submission correctly.
    pub fn check(&self) -> Result<()> {
        if self.is_time_based() && self.time_cap.is_none() {
            return Err(ScoringError::MissingTimeCap {
                wod_id: self.wod_id,
            });
        }

        if self.exercises.is_empty() {
            return Err(ScoringError::NoExercises {
                wod_id: self.wod_id,
            });
        }

        Ok(())
    }

    pub fn total_target_reps(&self) -> u32 {
        self.exercises
            .iter()
            .fold(0, |total: u32, e| total.saturating_add(e.target_reps))
    }
}
