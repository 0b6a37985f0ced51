//! Repository contracts for gyms and check-ins, with Postgres and in-memory
//! implementations.
//!
//! Implementations of [`CheckInsRepository::create`] must reject a second
//! check-in for the same user on the same UTC calendar day with
//! [`RepositoryError::Conflict`]. The check-in use case only performs a
//! check-then-act sequence and relies on storage to serialize racing writers.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::errors::RepositoryError;
use crate::models::{CheckIn, Coordinate, CreateCheckIn, CreateGym, Gym};

pub mod in_memory;
pub mod postgres;

pub use in_memory::{InMemoryCheckInsRepository, InMemoryGymsRepository};
pub use postgres::{PgCheckInsRepository, PgGymsRepository};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait GymsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Gym>>;

    async fn create(&self, data: CreateGym) -> RepositoryResult<Gym>;

    /// Gyms whose great-circle distance from `from` is at most `radius_km`.
    async fn find_many_nearby(&self, from: Coordinate, radius_km: f64) -> RepositoryResult<Vec<Gym>>;
}

#[async_trait]
pub trait CheckInsRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<CheckIn>>;

    /// The check-in `user_id` made on `date` (UTC), if any.
    async fn find_by_user_id_on_date(&self, user_id: Uuid, date: NaiveDate) -> RepositoryResult<Option<CheckIn>>;

    async fn create(&self, data: CreateCheckIn) -> RepositoryResult<CheckIn>;
}

/// Half-open `[start, end)` bounds of a UTC calendar day
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(chrono::NaiveTime::MIN).and_utc();
    (start, start + chrono::Duration::days(1))
}
