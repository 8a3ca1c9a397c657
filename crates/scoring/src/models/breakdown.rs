use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ClockTime, ExerciseSlot};

/// Normalized summary of one athlete's attempt at a time-capped WOD.
///
/// `completion_time` is only meaningful when `all_completed` is true; for
/// unfinished attempts it conventionally holds the time cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScoreBreakdown {
    pub all_completed: bool,
    #[schema(value_type = String, example = "08:45")]
    pub completion_time: ClockTime,
    pub completed_exercises: u32,
    pub total_exercises: u32,
    pub total_reps: u32,
    #[serde(default)]
    pub exercises: Vec<ExerciseBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ExerciseBreakdown {
    pub exercise: String,
    pub target_reps: u32,
    pub outcome: ExerciseSlot,
    pub credited_reps: u32,
}

impl ScoreBreakdown {
    /// Short result text for a leaderboard row: the time for finishers,
    /// the work done for everyone else.
    pub fn summary(&self) -> String {
        if self.all_completed {
            self.completion_time.to_string()
        } else {
            format!(
                "{} reps ({}/{})",
                self.total_reps, self.completed_exercises, self.total_exercises
            )
        }
    }

    /// Panics when the counts contradict each other. A breakdown like that
    /// can only come from a collaborator that built it by hand.
    pub fn assert_consistent(&self) {
        assert!(
            self.completed_exercises <= self.total_exercises,
            "malformed breakdown: {} completed exercises out of {}",
            self.completed_exercises,
            self.total_exercises
        );
        assert_eq!(
            self.all_completed,
            self.completed_exercises == self.total_exercises,
            "malformed breakdown: all_completed disagrees with {}/{} completed exercises",
            self.completed_exercises,
            self.total_exercises
        );
    }
}
