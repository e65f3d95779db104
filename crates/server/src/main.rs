use anyhow::{Context, Result};
use dotenv::dotenv;
use server::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("server", true);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config)
        .await
        .context("Failed to create database connection pool")?;

    if config.run_migrations {
        info!("🔄 Applying database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to apply database migrations")?;
        info!("✅ Database migrations applied");
    }

    let port = config.port;
    let state = AppState::new(pool, config)?;

    AppRouter::serve(port, state).await
}
