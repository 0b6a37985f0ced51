use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use super::routes::AppState;
use crate::errors::CheckInError;
use crate::models::{CheckIn, CheckInRequest};

#[derive(Debug, Deserialize)]
pub struct CheckInBody {
    /// Caller identity; authentication is handled upstream
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
}

pub fn check_in_routes() -> Router<AppState> {
    Router::new().route("/gyms/:gym_id/check-ins", post(create_check_in))
}

pub async fn create_check_in(
    State(state): State<AppState>,
    Path(gym_id): Path<Uuid>,
    Json(body): Json<CheckInBody>,
) -> Result<(StatusCode, Json<CheckIn>), CheckInError> {
    let check_in = state
        .check_in_service
        .check_in(CheckInRequest {
            user_id: body.user_id,
            gym_id,
            user_latitude: body.latitude,
            user_longitude: body.longitude,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(check_in)))
}
