use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CheckIn {
    pub id: Uuid,
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub validated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCheckIn {
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Input for a check-in attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInRequest {
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub user_latitude: f64,
    pub user_longitude: f64,
}

impl CheckInRequest {
    pub fn user_coordinate(&self) -> Coordinate {
        Coordinate::new(self.user_latitude, self.user_longitude)
    }
}
