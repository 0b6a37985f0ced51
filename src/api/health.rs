use axum::{extract::State, response::Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::routes::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Largest user-to-gym distance accepted for a check-in
    pub max_check_in_distance_km: f64,
    pub nearby_gyms_radius_km: f64,
    pub timestamp: DateTime<Utc>,
}

pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        max_check_in_distance_km: state.check_in_service.max_distance_km(),
        nearby_gyms_radius_km: state.fetch_nearby_gyms_service.radius_km(),
        timestamp: Utc::now(),
    })
}
