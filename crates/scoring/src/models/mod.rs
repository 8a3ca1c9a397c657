pub mod breakdown;
pub mod clock_time;
pub mod leaderboard;
pub mod score;
pub mod submission;
pub mod violation;
pub mod wod;

pub use breakdown::{ExerciseBreakdown, ScoreBreakdown};
pub use clock_time::ClockTime;
pub use leaderboard::{AthleteBreakdown, LeaderboardEntry, StandingsEntry};
pub use score::ScoreRecord;
pub use submission::{AcceptedSubmission, ExerciseResult, ExerciseSlot, RawScoreSubmission};
pub use violation::{Violation, ViolationCode};
pub use wod::{ExerciseTarget, ScoringMode, WodDefinition};
