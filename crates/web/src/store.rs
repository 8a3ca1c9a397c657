use std::collections::HashMap;
use std::sync::Arc;

use scoring::models::{AthleteBreakdown, ScoreRecord, WodDefinition};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process stand-in for the document store.
///
/// Scores are kept in first-submission order so leaderboard ties resolve
/// the same way on every read. A resubmission for the same athlete, WOD,
/// category and event replaces the earlier score in place.
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    wods: HashMap<Uuid, WodDefinition>,
    scores: Vec<ScoreRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the definition this one replaced, if any.
    pub async fn upsert_wod(&self, wod: WodDefinition) -> Option<WodDefinition> {
        let mut inner = self.inner.write().await;
        inner.wods.insert(wod.wod_id, wod)
    }

    pub async fn find_wod(&self, wod_id: Uuid) -> Option<WodDefinition> {
        self.inner.read().await.wods.get(&wod_id).cloned()
    }

    /// Last write wins. Returns the stored record and whether it replaced
    /// an earlier one.
    pub async fn upsert_score(&self, record: ScoreRecord) -> (ScoreRecord, bool) {
        let mut inner = self.inner.write().await;

        let existing = inner.scores.iter().position(|s| {
            s.event_id == record.event_id
                && s.category_id == record.category_id
                && s.wod_id == record.wod_id
                && s.athlete_id == record.athlete_id
        });

        match existing {
            Some(idx) => {
                let record = record.replacing(&inner.scores[idx]);
                inner.scores[idx] = record.clone();
                (record, true)
            }
            None => {
                inner.scores.push(record.clone());
                (record, false)
            }
        }
    }

    pub async fn list_scores(
        &self,
        event_id: Uuid,
        category_id: Option<Uuid>,
        wod_id: Option<Uuid>,
    ) -> Vec<ScoreRecord> {
        self.inner
            .read()
            .await
            .scores
            .iter()
            .filter(|s| s.event_id == event_id)
            .filter(|s| category_id.is_none_or(|id| s.category_id == id))
            .filter(|s| wod_id.is_none_or(|id| s.wod_id == id))
            .cloned()
            .collect()
    }

    pub async fn breakdowns(
        &self,
        event_id: Uuid,
        category_id: Uuid,
        wod_id: Uuid,
    ) -> Vec<AthleteBreakdown> {
        self.list_scores(event_id, Some(category_id), Some(wod_id))
            .await
            .into_iter()
            .map(|s| AthleteBreakdown::new(s.athlete_id, s.breakdown))
            .collect()
    }

    /// WODs with at least one score in the event category, in the order
    /// they were first scored.
    pub async fn scored_wods(&self, event_id: Uuid, category_id: Uuid) -> Vec<Uuid> {
        let mut wods = Vec::new();
        for score in self.list_scores(event_id, Some(category_id), None).await {
            if !wods.contains(&score.wod_id) {
                wods.push(score.wod_id);
            }
        }
        wods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use scoring::models::{ClockTime, RawScoreSubmission, ScoreBreakdown};

    fn record(event_id: Uuid, wod_id: Uuid, athlete_id: Uuid, reps: u32) -> ScoreRecord {
        let submission = RawScoreSubmission {
            event_id,
            category_id: Uuid::nil(),
            wod_id,
            athlete_id,
            exercises: Vec::new(),
            completion_time: Some("10:00".to_string()),
        };
        let breakdown = ScoreBreakdown {
            all_completed: false,
            completion_time: ClockTime::from_seconds(600),
            completed_exercises: 0,
            total_exercises: 1,
            total_reps: reps,
            exercises: Vec::new(),
        };
        ScoreRecord::new(submission, breakdown, Utc::now())
    }

    #[tokio::test]
    async fn test_resubmission_replaces_in_place() {
        let store = Store::new();
        let (event, wod) = (Uuid::new_v4(), Uuid::new_v4());
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let (first, updated) = store.upsert_score(record(event, wod, a, 10)).await;
        assert!(!updated);
        store.upsert_score(record(event, wod, b, 20)).await;

        let mut again = record(event, wod, a, 30);
        again.updated_at = again.updated_at + Duration::seconds(5);
        let (second, updated) = store.upsert_score(again).await;

        assert!(updated);
        assert_eq!(second.score_id, first.score_id);
        assert_eq!(second.created_at, first.created_at);

        let breakdowns = store.breakdowns(event, Uuid::nil(), wod).await;
        assert_eq!(breakdowns.len(), 2);
        assert_eq!(breakdowns[0].athlete_id, a);
        assert_eq!(breakdowns[0].breakdown.total_reps, 30);
        assert_eq!(breakdowns[1].athlete_id, b);
    }

    #[tokio::test]
    async fn test_scores_scoped_by_event_and_wod() {
        let store = Store::new();
        let (event, other_event) = (Uuid::new_v4(), Uuid::new_v4());
        let (wod_1, wod_2) = (Uuid::new_v4(), Uuid::new_v4());

        store.upsert_score(record(event, wod_2, Uuid::new_v4(), 1)).await;
        store.upsert_score(record(event, wod_1, Uuid::new_v4(), 1)).await;
        store.upsert_score(record(event, wod_2, Uuid::new_v4(), 1)).await;
        store.upsert_score(record(other_event, wod_1, Uuid::new_v4(), 1)).await;

        assert_eq!(store.list_scores(event, None, None).await.len(), 3);
        assert_eq!(store.list_scores(event, None, Some(wod_2)).await.len(), 2);
        assert_eq!(store.scored_wods(event, Uuid::nil()).await, vec![wod_2, wod_1]);
    }
}
