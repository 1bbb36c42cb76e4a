use crate::error::ApiError;
use crate::state::AppState;
use crate::v1::api_models::{RouteAtcDto, RouteAtcQuery};
use axum::Json;
use axum::extract::{Query, State};
use chrono::Utc;
use route_atc::{UserContext, classify_for_user};

pub async fn get_route_atc(
    State(state): State<AppState>,
    Query(params): Query<RouteAtcQuery>,
) -> Result<Json<RouteAtcDto>, ApiError> {
    let user = UserContext {
        simbrief_override: params.simbrief,
        ..UserContext::default()
    };
    route_atc_for(&state, &user).await
}

pub async fn post_route_atc(
    State(state): State<AppState>,
    Json(user): Json<UserContext>,
) -> Result<Json<RouteAtcDto>, ApiError> {
    route_atc_for(&state, &user).await
}

async fn route_atc_for(state: &AppState, user: &UserContext) -> Result<Json<RouteAtcDto>, ApiError> {
    let requested_at = Utc::now();
    let classification = classify_for_user(user, &state.flight_plans, &state.roster).await?;
    Ok(Json(RouteAtcDto {
        requested_at,
        classification,
    }))
}
