use std::sync::Arc;

use gym_check_in::api::{create_routes, AppState};
use gym_check_in::config::{run_migrations, AppConfig, CheckInConfig, DatabaseConfig};
use gym_check_in::repositories::{PgCheckInsRepository, PgGymsRepository};
use gym_check_in::utils::SystemClock;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = AppConfig::from_env()?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(app_config.tracing_level())
        .init();

    let db_config = DatabaseConfig::from_env()?;
    let check_in_config = CheckInConfig::from_env()?;

    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let state = AppState::new(
        Arc::new(PgCheckInsRepository::new(pool.clone())),
        Arc::new(PgGymsRepository::new(pool)),
        Arc::new(SystemClock),
        &check_in_config,
    );
    let app = create_routes(state);

    let address = app_config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Gym check-in server starting on http://{} ({})", address, app_config.environment);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
