/// Database layer for devstream
///
/// This module provides database connection pooling and schema bootstrap.
///
/// # Modules
///
/// - `pool`: MySQL connection pool management with health checks
/// - `schema`: Database and `user_data` table bootstrap
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use devstream_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod pool;
pub mod schema;
