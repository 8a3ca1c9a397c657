use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::{
    dto::score::{ScoreFilter, ScoreResponse},
    models::RawScoreSubmission,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::store::Store;

use super::services;

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = RawScoreSubmission,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Score accepted", body = ScoreResponse),
        (status = 200, description = "Score accepted and replaced an earlier one", body = ScoreResponse),
        (status = 400, description = "Score sheet rejected"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "WOD not found")
    ),
    tag = "scores"
)]
pub async fn submit_score(
    State(store): State<Store>,
    Json(submission): Json<RawScoreSubmission>,
) -> Result<Response, WebError> {
    let (record, updated) = services::submit_score(&store, submission).await?;

    let status = if updated {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((status, Json(ScoreResponse::from_record(record, updated))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{event_id}/scores",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        ScoreFilter
    ),
    responses(
        (status = 200, description = "Scores of the event", body = Vec<ScoreResponse>)
    ),
    tag = "scores"
)]
pub async fn list_event_scores(
    State(store): State<Store>,
    Path(event_id): Path<Uuid>,
    Query(filter): Query<ScoreFilter>,
) -> Result<Json<Vec<ScoreResponse>>, WebError> {
    let scores = services::list_event_scores(&store, event_id, &filter).await;

    let response: Vec<ScoreResponse> = scores.into_iter().map(ScoreResponse::from).collect();

    Ok(Json(response))
}
