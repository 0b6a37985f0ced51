// Business logic services

pub mod check_in_service;
pub mod gym_service;

pub use check_in_service::CheckInService;
pub use gym_service::{CreateGymService, FetchNearbyGymsService};
