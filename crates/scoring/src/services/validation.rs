use tracing::warn;

use crate::models::{
    AcceptedSubmission, ClockTime, ExerciseSlot, RawScoreSubmission, Violation, ViolationCode,
    WodDefinition,
};

/// Extra check run after the built-in rules. Push onto `report.errors` to
/// reject the submission, onto `report.warnings` to only log.
pub trait SubmissionRule: Send + Sync {
    fn check(
        &self,
        submission: &RawScoreSubmission,
        wod: &WodDefinition,
        report: &mut ValidationReport,
    );
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<Violation>,
    pub warnings: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

/// Validates time-capped score sheets against their WOD.
///
/// Every violated rule is reported, not only the first one, so a judge can
/// fix the whole sheet in one go.
#[derive(Default)]
pub struct SubmissionValidator {
    rules: Vec<Box<dyn SubmissionRule>>,
}

impl SubmissionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(mut self, rule: impl SubmissionRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn validate(
        &self,
        submission: &RawScoreSubmission,
        wod: &WodDefinition,
    ) -> Result<AcceptedSubmission, Vec<Violation>> {
        let (report, accepted) = self.run(submission, wod);

        match accepted {
            Some(accepted) if report.is_valid() => {
                report.log_warnings();
                Ok(accepted)
            }
            _ => Err(report.errors),
        }
    }

    pub fn report(&self, submission: &RawScoreSubmission, wod: &WodDefinition) -> ValidationReport {
        self.run(submission, wod).0
    }

    fn run(
        &self,
        submission: &RawScoreSubmission,
        wod: &WodDefinition,
    ) -> (ValidationReport, Option<AcceptedSubmission>) {
        let mut report = ValidationReport::default();

        let time_cap = wod.time_cap;
        if wod.is_time_based() && time_cap.is_none() {
            report.errors.push(
                Violation::new(
                    ViolationCode::TimeCapMissing,
                    format!(
                        "WOD '{}' must have time cap configured for time-based scoring",
                        wod.name
                    ),
                )
                .at("time_cap"),
            );
        }

        if submission.exercises.len() != wod.exercises.len() {
            report.errors.push(
                Violation::new(
                    ViolationCode::ExerciseCountMismatch,
                    format!(
                        "Expected {} exercise results, got {}",
                        wod.exercises.len(),
                        submission.exercises.len()
                    ),
                )
                .at("exercises"),
            );
        }

        let mut slots = Vec::with_capacity(submission.exercises.len());
        for (idx, result) in submission.exercises.iter().enumerate() {
            if result.completed {
                slots.push(ExerciseSlot::Completed);
                continue;
            }

            let field = format!("exercises[{}].max_reps", idx);
            let label = exercise_label(wod, idx);
            match result.max_reps {
                None => report.errors.push(
                    Violation::new(
                        ViolationCode::MaxRepsRequired,
                        format!("Max reps required for incomplete exercise {}", label),
                    )
                    .at(field),
                ),
                Some(reps) => match u32::try_from(reps) {
                    Ok(max_reps) => slots.push(ExerciseSlot::Incomplete { max_reps }),
                    Err(_) if reps < 0 => report.errors.push(
                        Violation::new(
                            ViolationCode::MaxRepsNegative,
                            format!("Max reps for exercise {} cannot be negative", label),
                        )
                        .at(field),
                    ),
                    Err(_) => report.errors.push(
                        Violation::new(
                            ViolationCode::MaxRepsOutOfRange,
                            format!("Max reps for exercise {} is out of range", label),
                        )
                        .at(field),
                    ),
                },
            }
        }

        if slots.len() == wod.exercises.len() {
            let total: u64 = slots
                .iter()
                .zip(&wod.exercises)
                .map(|(slot, target)| u64::from(slot.credited_reps(target.target_reps)))
                .sum();
            if total > u64::from(u32::MAX) {
                report.errors.push(
                    Violation::new(
                        ViolationCode::MaxRepsOutOfRange,
                        format!("Total reps ({}) are out of range", total),
                    )
                    .at("exercises"),
                );
            }
        }

        let completion_time = match submission.completion_time.as_deref().map(str::trim) {
            None | Some("") => {
                report.errors.push(
                    Violation::new(
                        ViolationCode::CompletionTimeRequired,
                        "Completion time is required",
                    )
                    .at("completion_time"),
                );
                None
            }
            Some(raw) => match raw.parse::<ClockTime>() {
                Ok(time) => Some(time),
                Err(e) => {
                    report.errors.push(
                        Violation::new(ViolationCode::InvalidTimeFormat, e.to_string())
                            .at("completion_time"),
                    );
                    None
                }
            },
        };

        if let (Some(time), Some(cap)) = (completion_time, time_cap) {
            let all_completed = submission.exercises.iter().all(|e| e.completed);
            if all_completed && time.exceeds(cap) {
                report.errors.push(
                    Violation::new(
                        ViolationCode::CompletionTimeExceedsTimeCap,
                        format!(
                            "Completion time ({}) cannot exceed time cap ({})",
                            time, cap
                        ),
                    )
                    .at("completion_time"),
                );
            } else if !all_completed && time != cap {
                report.warnings.push(
                    Violation::new(
                        ViolationCode::CompletionTimeNotAtCap,
                        format!(
                            "Athlete {} did not finish WOD '{}' but completion time {} differs from time cap {}",
                            submission.athlete_id, wod.name, time, cap
                        ),
                    )
                    .at("completion_time"),
                );
            }
        }

        for rule in &self.rules {
            rule.check(submission, wod, &mut report);
        }

        let accepted = completion_time.map(|time| AcceptedSubmission::new(submission, slots, time));

        (report, accepted)
    }
}

/// Validates with the built-in rules only.
pub fn validate(
    submission: &RawScoreSubmission,
    wod: &WodDefinition,
) -> Result<AcceptedSubmission, Vec<Violation>> {
    SubmissionValidator::new().validate(submission, wod)
}

/// Rejects an incomplete exercise claiming more reps than its target.
///
/// Not part of the default rule set.
pub struct RepsWithinTarget;

impl SubmissionRule for RepsWithinTarget {
    fn check(
        &self,
        submission: &RawScoreSubmission,
        wod: &WodDefinition,
        report: &mut ValidationReport,
    ) {
        for (idx, (result, target)) in submission.exercises.iter().zip(&wod.exercises).enumerate() {
            if let Some(reps) = result.max_reps
                && !result.completed
                && reps > i64::from(target.target_reps)
            {
                report.errors.push(
                    Violation::new(
                        ViolationCode::MaxRepsExceedsTarget,
                        format!(
                            "Max reps ({}) cannot exceed target reps ({}) for {}",
                            reps, target.target_reps, target.exercise
                        ),
                    )
                    .at(format!("exercises[{}].max_reps", idx)),
                );
            }
        }
    }
}

fn exercise_label(wod: &WodDefinition, idx: usize) -> String {
    match wod.exercises.get(idx) {
        Some(target) => format!("'{}'", target.exercise),
        None => format!("#{}", idx + 1),
    }
}
