use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CheckInsRepository, GymsRepository, RepositoryResult};
use crate::errors::RepositoryError;
use crate::models::{CheckIn, Coordinate, CreateCheckIn, CreateGym, Gym};
use crate::utils::distance_between_coordinates;

/// Memory-backed gyms store, used by tests and local runs without a database
#[derive(Debug, Default)]
pub struct InMemoryGymsRepository {
    items: RwLock<Vec<Gym>>,
}

impl InMemoryGymsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl GymsRepository for InMemoryGymsRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Gym>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|gym| gym.id == id).cloned())
    }

    async fn create(&self, data: CreateGym) -> RepositoryResult<Gym> {
        let gym = Gym {
            id: Uuid::new_v4(),
            title: data.title,
            description: data.description,
            phone: data.phone,
            latitude: data.latitude,
            longitude: data.longitude,
        };

        self.items.write().await.push(gym.clone());
        Ok(gym)
    }

    async fn find_many_nearby(&self, from: Coordinate, radius_km: f64) -> RepositoryResult<Vec<Gym>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|gym| distance_between_coordinates(from, gym.coordinate()) <= radius_km)
            .cloned()
            .collect())
    }
}

/// Memory-backed check-ins store
///
/// Enforces one check-in per user per UTC day inside the write lock, matching
/// the unique constraint of the Postgres table.
#[derive(Debug, Default)]
pub struct InMemoryCheckInsRepository {
    items: RwLock<Vec<CheckIn>>,
}

impl InMemoryCheckInsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl CheckInsRepository for InMemoryCheckInsRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<CheckIn>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|check_in| check_in.id == id).cloned())
    }

    async fn find_by_user_id_on_date(&self, user_id: Uuid, date: NaiveDate) -> RepositoryResult<Option<CheckIn>> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .find(|check_in| check_in.user_id == user_id && check_in.created_at.date_naive() == date)
            .cloned())
    }

    async fn create(&self, data: CreateCheckIn) -> RepositoryResult<CheckIn> {
        let mut items = self.items.write().await;

        let date = data.created_at.date_naive();
        if items
            .iter()
            .any(|check_in| check_in.user_id == data.user_id && check_in.created_at.date_naive() == date)
        {
            return Err(RepositoryError::Conflict(format!(
                "user {} already checked in on {}",
                data.user_id, date
            )));
        }

        let check_in = CheckIn {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            gym_id: data.gym_id,
            created_at: data.created_at,
            validated_at: None,
        };

        items.push(check_in.clone());
        Ok(check_in)
    }
}
