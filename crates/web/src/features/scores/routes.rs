use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{list_event_scores, submit_score};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::store::Store;

pub fn routes(api_keys: ApiKeys) -> Router<Store> {
    let protected = Router::new()
        .route("/scores", post(submit_score))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/events/:event_id/scores", get(list_event_scores))
        .merge(protected)
}
