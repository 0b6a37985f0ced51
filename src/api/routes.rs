use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::check_ins::check_in_routes;
use super::gyms::gym_routes;
use super::health::health_check;
use crate::config::CheckInConfig;
use crate::repositories::{CheckInsRepository, GymsRepository};
use crate::services::{CheckInService, CreateGymService, FetchNearbyGymsService};
use crate::utils::Clock;

#[derive(Clone)]
pub struct AppState {
    pub check_in_service: CheckInService,
    pub create_gym_service: CreateGymService,
    pub fetch_nearby_gyms_service: FetchNearbyGymsService,
}

impl AppState {
    pub fn new(
        check_ins: Arc<dyn CheckInsRepository>,
        gyms: Arc<dyn GymsRepository>,
        clock: Arc<dyn Clock>,
        config: &CheckInConfig,
    ) -> Self {
        Self {
            check_in_service: CheckInService::new(check_ins, gyms.clone(), clock, config),
            create_gym_service: CreateGymService::new(gyms.clone()),
            fetch_nearby_gyms_service: FetchNearbyGymsService::new(gyms, config),
        }
    }
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", gym_routes().merge(check_in_routes()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
