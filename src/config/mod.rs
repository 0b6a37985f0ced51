// Environment-driven configuration

pub mod app;
pub mod check_in;
pub mod database;

pub use app::AppConfig;
pub use check_in::CheckInConfig;
pub use database::{run_migrations, DatabaseConfig};
