use crate::state::AppState;
use crate::v1::handlers::{get_route_atc, post_route_atc};
use axum::Router;
use axum::routing::get;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/route-atc", get(get_route_atc).post(post_route_atc))
        .with_state(state)
}
