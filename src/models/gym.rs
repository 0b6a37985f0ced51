use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Gym {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Gym {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGym {
    pub title: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl CreateGym {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
