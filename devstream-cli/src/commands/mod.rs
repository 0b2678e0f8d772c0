/// Subcommand implementations
///
/// One module per subcommand. Database commands share the `connect` helper,
/// which turns the loaded configuration into a ready pool.

pub mod ages;
pub mod batch;
pub mod org;
pub mod pages;
pub mod seed;
pub mod stream;

use crate::config::Config;
use anyhow::Context;
use devstream_shared::db::pool::{create_pool, DatabaseConfig};
use sqlx::MySqlPool;

/// Opens a connection pool from the loaded configuration
///
/// # Errors
///
/// Returns an error if `DATABASE_URL` is unset or the server is unreachable
pub async fn connect(config: &Config) -> anyhow::Result<MySqlPool> {
    let url = config.require_database_url()?;

    let pool = create_pool(DatabaseConfig {
        url: url.to_string(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await
    .context("failed to connect to the database")?;

    Ok(pool)
}
