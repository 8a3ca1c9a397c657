use axum::{Router, routing::get};

use super::handlers::{get_event_standings, get_wod_leaderboard};
use crate::store::Store;

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/:event_id/:category_id", get(get_event_standings))
        .route("/:event_id/:category_id/:wod_id", get(get_wod_leaderboard))
}
