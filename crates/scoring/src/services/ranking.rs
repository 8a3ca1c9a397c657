use std::cmp::Ordering;

use crate::models::{AthleteBreakdown, LeaderboardEntry, ScoreBreakdown};

/// Leaderboard order for a time-capped WOD.
///
/// Finishers first, fastest first. Everyone who hit the cap comes after,
/// ordered by exercises completed and then by total reps.
pub fn compare(a: &ScoreBreakdown, b: &ScoreBreakdown) -> Ordering {
    match (a.all_completed, b.all_completed) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.completion_time.cmp(&b.completion_time),
        (false, false) => b
            .completed_exercises
            .cmp(&a.completed_exercises)
            .then_with(|| b.total_reps.cmp(&a.total_reps)),
    }
}

/// Ranks one event/category/WOD worth of breakdowns.
///
/// The sort is stable and ranks are assigned by position, so tied athletes
/// get consecutive ranks in input order rather than a shared rank.
///
/// # Panics
///
/// Panics if a breakdown's counts contradict each other.
pub fn rank(scores: &[AthleteBreakdown]) -> Vec<LeaderboardEntry> {
    for score in scores {
        score.breakdown.assert_consistent();
    }

    let mut ordered: Vec<&AthleteBreakdown> = scores.iter().collect();
    ordered.sort_by(|a, b| compare(&a.breakdown, &b.breakdown));

    ordered
        .into_iter()
        .enumerate()
        .map(|(idx, score)| LeaderboardEntry {
            rank: idx as u32 + 1,
            athlete_id: score.athlete_id,
            breakdown: score.breakdown.clone(),
        })
        .collect()
}
