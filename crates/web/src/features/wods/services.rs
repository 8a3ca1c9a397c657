use scoring::{dto::wod::CreateWodRequest, models::WodDefinition};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::store::Store;

/// Register or replace a WOD definition
pub async fn register_wod(store: &Store, request: CreateWodRequest) -> WebResult<WodDefinition> {
    let wod = request.into_definition();
    wod.check()?;

    if store.upsert_wod(wod.clone()).await.is_some() {
        tracing::info!("Replaced WOD definition {} ({})", wod.wod_id, wod.name);
    } else {
        tracing::info!("Registered WOD {} ({})", wod.wod_id, wod.name);
    }

    Ok(wod)
}

/// Get a WOD definition by id
pub async fn get_wod(store: &Store, wod_id: Uuid) -> WebResult<WodDefinition> {
    store.find_wod(wod_id).await.ok_or(WebError::NotFound)
}
