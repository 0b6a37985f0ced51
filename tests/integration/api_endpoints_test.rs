use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use gym_check_in::api::{create_routes, AppState};
use gym_check_in::config::CheckInConfig;
use gym_check_in::models::{CheckIn, Gym};
use gym_check_in::repositories::{CheckInsRepository, InMemoryCheckInsRepository, InMemoryGymsRepository};
use gym_check_in::utils::FixedClock;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use crate::common::*;

struct TestApp {
    router: Router,
    check_ins: Arc<InMemoryCheckInsRepository>,
}

impl TestApp {
    fn new() -> Self {
        init_test_logging();

        let check_ins = Arc::new(InMemoryCheckInsRepository::new());
        let state = AppState::new(
            check_ins.clone(),
            Arc::new(InMemoryGymsRepository::new()),
            Arc::new(FixedClock::new(at(2025, 10, 15, 8, 0))),
            &CheckInConfig::default(),
        );

        Self {
            router: create_routes(state),
            check_ins,
        }
    }

    async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn create_gym(&self, title: &str, latitude: f64, longitude: f64) -> Gym {
        let (status, body) = self
            .request(
                "POST",
                "/api/gyms",
                Some(json!({
                    "title": title,
                    "description": null,
                    "phone": null,
                    "latitude": latitude,
                    "longitude": longitude,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        serde_json::from_value(body).unwrap()
    }
}

#[cfg(test)]
mod api_endpoints_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_health_check() {
        let app = TestApp::new();

        let (status, body) = app.request("GET", "/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "gym-check-in");
        assert_eq!(body["max_check_in_distance_km"], 0.1);
        assert_eq!(body["nearby_gyms_radius_km"], 10.0);
    }

    #[tokio::test]
    async fn test_check_in_flow() {
        let app = TestApp::new();
        let gym = app.create_gym("JavaScript Gym", GYM_LATITUDE, GYM_LONGITUDE).await;
        let user_id = Uuid::new_v4();
        let uri = format!("/api/gyms/{}/check-ins", gym.id);
        let payload = json!({
            "user_id": user_id,
            "latitude": GYM_LATITUDE,
            "longitude": GYM_LONGITUDE,
        });

        let (status, body) = app.request("POST", &uri, Some(payload.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        let check_in: CheckIn = serde_json::from_value(body).unwrap();
        assert_eq!(check_in.user_id, user_id);
        assert_eq!(check_in.gym_id, gym.id);
        assert!(app.check_ins.find_by_id(check_in.id).await.unwrap().is_some());

        let (status, body) = app.request("POST", &uri, Some(payload)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Max number of check-ins reached");
    }

    #[tokio::test]
    async fn test_check_in_too_far_is_bad_request() {
        let app = TestApp::new();
        let gym = app.create_gym("JavaScript Gym", GYM_LATITUDE, GYM_LONGITUDE).await;

        let (status, body) = app
            .request(
                "POST",
                &format!("/api/gyms/{}/check-ins", gym.id),
                Some(json!({
                    "user_id": Uuid::new_v4(),
                    "latitude": FAR_LATITUDE,
                    "longitude": FAR_LONGITUDE,
                })),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Max distance reached");
        assert!(app.check_ins.is_empty().await);
    }

    #[tokio::test]
    async fn test_check_in_unknown_gym_is_not_found() {
        let app = TestApp::new();

        let (status, body) = app
            .request(
                "POST",
                &format!("/api/gyms/{}/check-ins", Uuid::new_v4()),
                Some(json!({
                    "user_id": Uuid::new_v4(),
                    "latitude": GYM_LATITUDE,
                    "longitude": GYM_LONGITUDE,
                })),
            )
            .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Resource not found");
    }

    #[tokio::test]
    async fn test_fetch_nearby_gyms() {
        let app = TestApp::new();
        app.create_gym("Near Gym", GYM_LATITUDE, GYM_LONGITUDE).await;
        app.create_gym("Far Gym", -22.4328599, -45.4792674).await;

        let (status, body) = app
            .request(
                "GET",
                &format!("/api/gyms/nearby?latitude={}&longitude={}", GYM_LATITUDE, GYM_LONGITUDE),
                None,
            )
            .await;

        assert_eq!(status, StatusCode::OK);
        let gyms: Vec<Gym> = serde_json::from_value(body).unwrap();
        assert_eq!(gyms.len(), 1);
        assert_eq!(gyms[0].title, "Near Gym");
    }

    #[tokio::test]
    async fn test_create_gym_with_blank_title_is_bad_request() {
        let app = TestApp::new();

        let (status, body) = app
            .request(
                "POST",
                "/api/gyms",
                Some(json!({
                    "title": "",
                    "latitude": GYM_LATITUDE,
                    "longitude": GYM_LONGITUDE,
                })),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid input");
    }
}
