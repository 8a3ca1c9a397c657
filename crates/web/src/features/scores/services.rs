use chrono::Utc;
use scoring::{
    compute_breakdown,
    dto::score::ScoreFilter,
    models::{RawScoreSubmission, ScoreRecord},
    validate,
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::store::Store;

/// Validate a score sheet, derive its breakdown and store it.
///
/// Returns the stored record and whether it replaced an earlier score.
pub async fn submit_score(
    store: &Store,
    submission: RawScoreSubmission,
) -> WebResult<(ScoreRecord, bool)> {
    let wod = store
        .find_wod(submission.wod_id)
        .await
        .ok_or(WebError::NotFound)?;

    if !wod.is_time_based() {
        return Err(WebError::BadRequest(format!(
            "WOD '{}' is not scored by time",
            wod.name
        )));
    }
    wod.check()?;

    let accepted = validate(&submission, &wod).map_err(|violations| {
        tracing::info!(
            "Rejected score for athlete {} on WOD {}: {} violation(s)",
            submission.athlete_id,
            wod.wod_id,
            violations.len()
        );
        WebError::Rejected(violations)
    })?;

    let breakdown = compute_breakdown(&accepted, &wod);
    tracing::debug!(
        "Athlete {} on WOD {}: {}",
        accepted.athlete_id(),
        wod.wod_id,
        breakdown.summary()
    );

    let record = ScoreRecord::new(submission, breakdown, Utc::now());
    Ok(store.upsert_score(record).await)
}

/// List scores of an event, optionally narrowed to a category or WOD
pub async fn list_event_scores(
    store: &Store,
    event_id: Uuid,
    filter: &ScoreFilter,
) -> Vec<ScoreRecord> {
    store
        .list_scores(event_id, filter.category_id, filter.wod_id)
        .await
}
