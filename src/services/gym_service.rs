use std::sync::Arc;

use tracing::{info, instrument};

use crate::config::CheckInConfig;
use crate::errors::GymError;
use crate::models::{Coordinate, CreateGym, Gym};
use crate::repositories::GymsRepository;

#[derive(Clone)]
pub struct CreateGymService {
    gyms: Arc<dyn GymsRepository>,
}

impl CreateGymService {
    pub fn new(gyms: Arc<dyn GymsRepository>) -> Self {
        Self { gyms }
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_gym(&self, request: CreateGym) -> Result<Gym, GymError> {
        if request.title.trim().is_empty() {
            return Err(GymError::InvalidInput("Title must not be empty".to_string()));
        }
        request
            .coordinate()
            .validate()
            .map_err(GymError::InvalidInput)?;

        let gym = self.gyms.create(request).await?;

        info!(gym_id = %gym.id, "gym created");
        Ok(gym)
    }
}

/// Lists gyms within walking range of the user
#[derive(Clone)]
pub struct FetchNearbyGymsService {
    gyms: Arc<dyn GymsRepository>,
    radius_km: f64,
}

impl FetchNearbyGymsService {
    pub fn new(gyms: Arc<dyn GymsRepository>, config: &CheckInConfig) -> Self {
        Self {
            gyms,
            radius_km: config.nearby_radius_km,
        }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    #[instrument(skip(self))]
    pub async fn fetch_nearby(&self, user: Coordinate) -> Result<Vec<Gym>, GymError> {
        user.validate().map_err(GymError::InvalidInput)?;

        let gyms = self.gyms.find_many_nearby(user, self.radius_km).await?;
        Ok(gyms)
    }
}
