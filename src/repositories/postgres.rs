use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{day_bounds, CheckInsRepository, GymsRepository, RepositoryResult};
use crate::errors::RepositoryError;
use crate::models::{CheckIn, Coordinate, CreateCheckIn, CreateGym, Gym};
use crate::utils::EARTH_RADIUS_KM;

#[derive(Clone)]
pub struct PgGymsRepository {
    db: PgPool,
}

impl PgGymsRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GymsRepository for PgGymsRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Gym>> {
        let gym = sqlx::query_as::<_, Gym>(
            "SELECT id, title, description, phone, latitude, longitude FROM gyms WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(gym)
    }

    async fn create(&self, data: CreateGym) -> RepositoryResult<Gym> {
        let gym = sqlx::query_as::<_, Gym>(
            r#"
            INSERT INTO gyms (id, title, description, phone, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, phone, latitude, longitude
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.title)
        .bind(data.description)
        .bind(data.phone)
        .bind(data.latitude)
        .bind(data.longitude)
        .fetch_one(&self.db)
        .await?;

        Ok(gym)
    }

    async fn find_many_nearby(&self, from: Coordinate, radius_km: f64) -> RepositoryResult<Vec<Gym>> {
        // Haversine, same formula as utils::geo
        let gyms = sqlx::query_as::<_, Gym>(
            r#"
            SELECT id, title, description, phone, latitude, longitude
            FROM gyms
            WHERE $3 * 2 * ASIN(LEAST(1.0, SQRT(
                POWER(SIN(RADIANS(latitude - $1) / 2), 2)
                + COS(RADIANS($1)) * COS(RADIANS(latitude)) * POWER(SIN(RADIANS(longitude - $2) / 2), 2)
            ))) <= $4
            ORDER BY title
            "#,
        )
        .bind(from.latitude)
        .bind(from.longitude)
        .bind(EARTH_RADIUS_KM)
        .bind(radius_km)
        .fetch_all(&self.db)
        .await?;

        Ok(gyms)
    }
}

#[derive(Clone)]
pub struct PgCheckInsRepository {
    db: PgPool,
}

impl PgCheckInsRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CheckInsRepository for PgCheckInsRepository {
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<CheckIn>> {
        let check_in = sqlx::query_as::<_, CheckIn>(
            "SELECT id, user_id, gym_id, created_at, validated_at FROM check_ins WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;

        Ok(check_in)
    }

    async fn find_by_user_id_on_date(&self, user_id: Uuid, date: NaiveDate) -> RepositoryResult<Option<CheckIn>> {
        let (start_of_day, end_of_day) = day_bounds(date);

        let check_in = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, user_id, gym_id, created_at, validated_at
            FROM check_ins
            WHERE user_id = $1 AND created_at >= $2 AND created_at < $3
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(start_of_day)
        .bind(end_of_day)
        .fetch_optional(&self.db)
        .await?;

        Ok(check_in)
    }

    async fn create(&self, data: CreateCheckIn) -> RepositoryResult<CheckIn> {
        let result = sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO check_ins (id, user_id, gym_id, created_at, check_in_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, gym_id, created_at, validated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(data.gym_id)
        .bind(data.created_at)
        .bind(data.created_at.date_naive())
        .fetch_one(&self.db)
        .await;

        match result {
            Ok(check_in) => Ok(check_in),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                debug!("unique violation on check_ins for user {}", data.user_id);
                Err(RepositoryError::Conflict(format!(
                    "user {} already checked in on {}",
                    data.user_id,
                    data.created_at.date_naive()
                )))
            }
            Err(err) => Err(err.into()),
        }
    }
}
