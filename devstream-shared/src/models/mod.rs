/// Database models for devstream
///
/// This module contains the database models and their query operations.
///
/// # Models
///
/// - `user`: Rows of the `user_data` table, with insert, lookup, and the
///   streaming/pagination query surface used by the reporting commands
///
/// # Example
///
/// ```no_run
/// use devstream_shared::models::user::{NewUser, UserRecord};
/// use devstream_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = NewUser {
///     user_id: None,
///     name: "Ada Lovelace".to_string(),
///     email: "ada@example.com".to_string(),
///     age: 36,
/// };
///
/// let user = UserRecord::insert(&pool, new_user).await?;
/// println!("Inserted user {}", user.user_id);
/// # Ok(())
/// # }
/// ```

pub mod user;
