use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::config::CheckInConfig;
use crate::errors::{CheckInError, RepositoryError};
use crate::models::{CheckIn, CheckInRequest, CreateCheckIn};
use crate::repositories::{CheckInsRepository, GymsRepository};
use crate::utils::{distance_between_coordinates, Clock};

/// Validates and records a user's check-in at a gym.
///
/// A check-in is accepted only when the user is within `max_distance_km` of
/// the gym and has not already checked in on the current UTC calendar day.
#[derive(Clone)]
pub struct CheckInService {
    check_ins: Arc<dyn CheckInsRepository>,
    gyms: Arc<dyn GymsRepository>,
    clock: Arc<dyn Clock>,
    max_distance_km: f64,
}

impl CheckInService {
    pub fn new(
        check_ins: Arc<dyn CheckInsRepository>,
        gyms: Arc<dyn GymsRepository>,
        clock: Arc<dyn Clock>,
        config: &CheckInConfig,
    ) -> Self {
        Self {
            check_ins,
            gyms,
            clock,
            max_distance_km: config.max_distance_km,
        }
    }

    pub fn max_distance_km(&self) -> f64 {
        self.max_distance_km
    }

    #[instrument(skip(self), fields(user_id = %request.user_id, gym_id = %request.gym_id))]
    pub async fn check_in(&self, request: CheckInRequest) -> Result<CheckIn, CheckInError> {
        let user_coordinate = request.user_coordinate();
        user_coordinate
            .validate()
            .map_err(CheckInError::InvalidCoordinates)?;

        let gym = self
            .gyms
            .find_by_id(request.gym_id)
            .await?
            .ok_or(CheckInError::ResourceNotFound)?;

        let distance_km = distance_between_coordinates(user_coordinate, gym.coordinate());
        if distance_km > self.max_distance_km {
            warn!(distance_km, max_distance_km = self.max_distance_km, "check-in rejected: too far from gym");
            return Err(CheckInError::MaxDistance);
        }

        let now = self.clock.now();
        let today = now.date_naive();

        if self
            .check_ins
            .find_by_user_id_on_date(request.user_id, today)
            .await?
            .is_some()
        {
            warn!(%today, "check-in rejected: already checked in today");
            return Err(CheckInError::MaxNumberOfCheckIns);
        }

        let check_in = self
            .check_ins
            .create(CreateCheckIn {
                user_id: request.user_id,
                gym_id: request.gym_id,
                created_at: now,
            })
            .await
            .map_err(|err| match err {
                // Lost a race with a concurrent check-in for the same day
                RepositoryError::Conflict(_) => CheckInError::MaxNumberOfCheckIns,
                other => CheckInError::Repository(other),
            })?;

        info!(check_in_id = %check_in.id, distance_km, "check-in recorded");
        Ok(check_in)
    }
}
