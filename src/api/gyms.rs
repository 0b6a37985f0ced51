use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use super::routes::AppState;
use crate::errors::GymError;
use crate::models::{Coordinate, CreateGym, Gym};

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
}

pub fn gym_routes() -> Router<AppState> {
    Router::new()
        .route("/gyms", post(create_gym))
        .route("/gyms/nearby", get(fetch_nearby_gyms))
}

pub async fn create_gym(
    State(state): State<AppState>,
    Json(request): Json<CreateGym>,
) -> Result<(StatusCode, Json<Gym>), GymError> {
    let gym = state.create_gym_service.create_gym(request).await?;
    Ok((StatusCode::CREATED, Json(gym)))
}

pub async fn fetch_nearby_gyms(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<Gym>>, GymError> {
    let gyms = state
        .fetch_nearby_gyms_service
        .fetch_nearby(Coordinate::new(query.latitude, query.longitude))
        .await?;

    Ok(Json(gyms))
}
