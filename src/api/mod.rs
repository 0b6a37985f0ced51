// API routes and handlers

pub mod check_ins;
pub mod gyms;
pub mod health;
pub mod routes;

pub use routes::{create_routes, AppState};
