use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("WOD {wod_id} must have a time cap configured for time-based scoring")]
    MissingTimeCap { wod_id: Uuid },

    #[error("WOD {wod_id} has no exercises")]
    NoExercises { wod_id: Uuid },

    #[error("Invalid time format '{0}'. Use mm:ss (e.g., 10:00)")]
    InvalidTime(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    /// Errors that come from how a WOD was set up rather than from a submission.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ScoringError::MissingTimeCap { .. } | ScoringError::NoExercises { .. }
        )
    }
}
