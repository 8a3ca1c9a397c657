use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{create_wod, get_wod};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::store::Store;

pub fn routes(api_keys: ApiKeys) -> Router<Store> {
    let protected = Router::new()
        .route("/", post(create_wod))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/:wod_id", get(get_wod))
        .merge(protected)
}
