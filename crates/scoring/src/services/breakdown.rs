use crate::models::{AcceptedSubmission, ExerciseBreakdown, ScoreBreakdown, WodDefinition};

/// Derives the breakdown stored with a score.
///
/// Completed exercises are credited with their target reps, incomplete ones
/// with the reps reached. The completion time is copied as submitted; the
/// validator is responsible for it being the cap on unfinished attempts.
pub fn compute_breakdown(submission: &AcceptedSubmission, wod: &WodDefinition) -> ScoreBreakdown {
    debug_assert_eq!(submission.wod_id(), wod.wod_id, "submission scored against another WOD");
    debug_assert_eq!(
        submission.slots().len(),
        wod.exercises.len(),
        "submission and WOD disagree on exercise count"
    );

    let exercises: Vec<ExerciseBreakdown> = submission
        .slots()
        .iter()
        .zip(&wod.exercises)
        .map(|(slot, target)| ExerciseBreakdown {
            exercise: target.exercise.clone(),
            target_reps: target.target_reps,
            outcome: *slot,
            credited_reps: slot.credited_reps(target.target_reps),
        })
        .collect();

    let completed_exercises = exercises
        .iter()
        .filter(|e| e.outcome.is_completed())
        .count() as u32;

    ScoreBreakdown {
        all_completed: submission.all_completed(),
        completion_time: submission.completion_time(),
        completed_exercises,
        total_exercises: wod.exercises.len() as u32,
        total_reps: exercises
            .iter()
            .fold(0, |total: u32, e| total.saturating_add(e.credited_reps)),
        exercises,
    }
}
