use scoring::{
    dto::leaderboard::{LeaderboardResponse, LeaderboardRow, StandingsResponse},
    rank,
    services::standings::{PointsTable, standings},
};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::store::Store;

/// Rank the current scores of one WOD within an event category
pub async fn wod_leaderboard(
    store: &Store,
    event_id: Uuid,
    category_id: Uuid,
    wod_id: Uuid,
) -> WebResult<LeaderboardResponse> {
    let wod = store.find_wod(wod_id).await.ok_or(WebError::NotFound)?;

    let breakdowns = store.breakdowns(event_id, category_id, wod_id).await;
    let entries = rank(&breakdowns)
        .into_iter()
        .map(LeaderboardRow::from)
        .collect();

    Ok(LeaderboardResponse {
        event_id,
        category_id,
        wod_id,
        wod_name: wod.name,
        entries,
    })
}

/// Overall standings of an event category across every scored WOD
pub async fn event_standings(
    store: &Store,
    event_id: Uuid,
    category_id: Uuid,
) -> StandingsResponse {
    let mut leaderboards = Vec::new();
    for wod_id in store.scored_wods(event_id, category_id).await {
        let breakdowns = store.breakdowns(event_id, category_id, wod_id).await;
        leaderboards.push(rank(&breakdowns));
    }

    StandingsResponse {
        event_id,
        category_id,
        wods_counted: leaderboards.len() as u32,
        entries: standings(&leaderboards, &PointsTable::default()),
    }
}
