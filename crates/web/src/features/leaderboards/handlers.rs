use axum::{
    Json,
    extract::{Path, State},
};
use scoring::dto::leaderboard::{LeaderboardResponse, StandingsResponse};
use uuid::Uuid;

use crate::error::WebError;
use crate::store::Store;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboards/{event_id}/{category_id}/{wod_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        ("category_id" = Uuid, Path, description = "Category id"),
        ("wod_id" = Uuid, Path, description = "WOD id")
    ),
    responses(
        (status = 200, description = "Ranked WOD leaderboard", body = LeaderboardResponse),
        (status = 404, description = "WOD not found")
    ),
    tag = "leaderboards"
)]
pub async fn get_wod_leaderboard(
    State(store): State<Store>,
    Path((event_id, category_id, wod_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<LeaderboardResponse>, WebError> {
    let leaderboard = services::wod_leaderboard(&store, event_id, category_id, wod_id).await?;

    Ok(Json(leaderboard))
}

#[utoipa::path(
    get,
    path = "/api/leaderboards/{event_id}/{category_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        ("category_id" = Uuid, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Points standings across all scored WODs", body = StandingsResponse)
    ),
    tag = "leaderboards"
)]
pub async fn get_event_standings(
    State(store): State<Store>,
    Path((event_id, category_id)): Path<(Uuid, Uuid)>,
) -> Json<StandingsResponse> {
    Json(services::event_standings(&store, event_id, category_id).await)
}
