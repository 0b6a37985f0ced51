use anyhow::{bail, Result};
use std::env;

/// Maximum distance between user and gym for a check-in, in kilometers
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 0.1;
/// Radius used when listing nearby gyms, in kilometers
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckInConfig {
    pub max_distance_km: f64,
    pub nearby_radius_km: f64,
}

impl Default for CheckInConfig {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            nearby_radius_km: DEFAULT_NEARBY_RADIUS_KM,
        }
    }
}

impl CheckInConfig {
    pub fn from_env() -> Result<Self> {
        let max_distance_km: f64 = match env::var("CHECK_IN_MAX_DISTANCE_KM") {
            Ok(value) => value.parse()?,
            Err(_) => DEFAULT_MAX_DISTANCE_KM,
        };
        let nearby_radius_km: f64 = match env::var("NEARBY_GYMS_RADIUS_KM") {
            Ok(value) => value.parse()?,
            Err(_) => DEFAULT_NEARBY_RADIUS_KM,
        };

        if !max_distance_km.is_finite() || max_distance_km < 0.0 {
            bail!("CHECK_IN_MAX_DISTANCE_KM must be a non-negative number, got {}", max_distance_km);
        }
        if !nearby_radius_km.is_finite() || nearby_radius_km < 0.0 {
            bail!("NEARBY_GYMS_RADIUS_KM must be a non-negative number, got {}", nearby_radius_km);
        }

        Ok(Self {
            max_distance_km,
            nearby_radius_km,
        })
    }
}
