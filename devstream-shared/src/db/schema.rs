/// Database and table bootstrap
///
/// This module creates the backing database and the `user_data` table when
/// they are missing. The seeding command runs it before importing anything,
/// so a fresh MySQL server needs no manual setup.
///
/// The schema is small enough that it is applied as plain DDL rather than
/// through a migration directory.
///
/// # Example
///
/// ```no_run
/// use devstream_shared::db::pool::{create_pool, DatabaseConfig};
/// use devstream_shared::db::schema::{ensure_database_exists, create_user_data_table};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let url = std::env::var("DATABASE_URL")?;
///     ensure_database_exists(&url).await?;
///
///     let pool = create_pool(DatabaseConfig {
///         url,
///         ..Default::default()
///     })
///     .await?;
///
///     create_user_data_table(&pool).await?;
///     Ok(())
/// }
/// ```

use sqlx::migrate::MigrateDatabase;
use sqlx::mysql::MySqlPool;
use sqlx::MySql;
use tracing::{debug, info, warn};

/// DDL for the `user_data` table
///
/// `user_id` is a canonical hyphenated UUID string, so CHAR(36). Ages are
/// whole numbers no larger than three digits.
const CREATE_USER_DATA_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS user_data (
    user_id CHAR(36) NOT NULL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    age SMALLINT UNSIGNED NOT NULL
)
"#;

/// Creates the database if it doesn't exist
///
/// The database name is taken from the connection URL. sqlx connects to the
/// server without selecting a database to issue the CREATE, so this works
/// against a fresh MySQL instance.
///
/// # Errors
///
/// Returns an error if:
/// - Cannot connect to the MySQL server
/// - Don't have permission to create databases
/// - Database creation fails
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    info!("Checking if database exists");

    if !MySql::database_exists(database_url).await? {
        info!("Database does not exist, creating it");
        MySql::create_database(database_url).await?;
        info!("Database created successfully");
    } else {
        debug!("Database already exists");
    }

    Ok(())
}

/// Creates the `user_data` table if it doesn't exist
///
/// Safe to call repeatedly; `IF NOT EXISTS` makes it a no-op once the table
/// is in place.
///
/// # Errors
///
/// Returns an error if the DDL fails to execute or the connection is lost
pub async fn create_user_data_table(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    debug!("Ensuring user_data table exists");

    sqlx::query(CREATE_USER_DATA_TABLE).execute(pool).await?;

    info!("user_data table ready");
    Ok(())
}

/// Checks whether the `user_data` table exists in the current database
///
/// # Errors
///
/// Returns an error if the information_schema query fails
pub async fn user_data_table_exists(pool: &MySqlPool) -> Result<bool, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as(
        r#"
        SELECT COUNT(*)
        FROM information_schema.tables
        WHERE table_schema = DATABASE()
          AND table_name = 'user_data'
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

/// Drops the database (USE WITH CAUTION!)
///
/// This function will delete the entire database and all its data.
/// Only use this in development/testing environments.
///
/// # Safety
///
/// ⚠️  **WARNING**: This function PERMANENTLY DELETES ALL DATA in the database.
/// Never use this in production!
///
/// # Errors
///
/// Returns an error if:
/// - Cannot connect to the MySQL server
/// - Don't have permission to drop databases
pub async fn drop_database(database_url: &str) -> Result<(), sqlx::Error> {
    warn!("⚠️  DROPPING DATABASE: {}", database_url);

    if MySql::database_exists(database_url).await? {
        MySql::drop_database(database_url).await?;
        info!("Database dropped successfully");
    } else {
        debug!("Database does not exist, nothing to drop");
    }

    Ok(())
}
