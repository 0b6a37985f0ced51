// Gym check-in service library

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
