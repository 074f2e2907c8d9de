use crate::utils::config::DatabaseConfig;
use anyhow::Error;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Builds the process-wide pool. Connections are opened on first use, so an
/// unreachable store surfaces as request failures instead of a startup crash.
pub fn connect_lazy(config: &DatabaseConfig) -> Result<PgPool, Error> {
    info!("Connecting to: {}", config.display_host());
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .test_before_acquire(true)
        .connect_lazy(&config.url)?;
    info!("Database pool created");
    Ok(pool)
}
