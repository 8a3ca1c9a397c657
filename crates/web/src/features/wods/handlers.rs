use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::dto::wod::{CreateWodRequest, WodResponse};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::store::Store;

use super::services;

#[utoipa::path(
    post,
    path = "/api/wods",
    request_body = CreateWodRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "WOD registered successfully", body = WodResponse),
        (status = 400, description = "Validation error or time-based WOD without a time cap"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "wods"
)]
pub async fn create_wod(
    State(store): State<Store>,
    Json(req): Json<CreateWodRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    req.validate_time_cap()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let wod = services::register_wod(&store, req).await?;

    Ok((StatusCode::CREATED, Json(WodResponse::from(wod))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/wods/{wod_id}",
    params(
        ("wod_id" = Uuid, Path, description = "WOD id")
    ),
    responses(
        (status = 200, description = "WOD found", body = WodResponse),
        (status = 404, description = "WOD not found")
    ),
    tag = "wods"
)]
pub async fn get_wod(
    State(store): State<Store>,
    Path(wod_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let wod = services::get_wod(&store, wod_id).await?;

    Ok(Json(WodResponse::from(wod)).into_response())
}
