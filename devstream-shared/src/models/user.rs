/// User data model and query operations
///
/// This module provides the `UserRecord` model for the `user_data` table,
/// plus the streaming query surface the reporting commands are built on:
/// row-at-a-time streaming, fixed-size batches, lazy pagination, and an
/// incremental age aggregate. None of the streaming operations materialize
/// the full table.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE user_data (
///     user_id CHAR(36) NOT NULL PRIMARY KEY,
///     name VARCHAR(255) NOT NULL,
///     email VARCHAR(255) NOT NULL,
///     age SMALLINT UNSIGNED NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use devstream_shared::models::user::{NewUser, UserRecord};
/// use devstream_shared::db::pool::{create_pool, DatabaseConfig};
/// use futures::TryStreamExt;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// // Insert, generating a user_id
/// let user = UserRecord::insert(
///     &pool,
///     NewUser {
///         user_id: None,
///         name: "Ada Lovelace".to_string(),
///         email: "ada@example.com".to_string(),
///         age: 36,
///     },
/// )
/// .await?;
///
/// // Stream the table one row at a time
/// let mut rows = UserRecord::stream(&pool);
/// while let Some(row) = rows.try_next().await? {
///     println!("{} <{}>", row.name, row.email);
/// }
/// # Ok(())
/// # }
/// ```

use futures::stream::BoxStream;
use futures::{Stream, TryStreamExt};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlPool;
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

/// A row of the `user_data` table
///
/// `user_id` is a canonical hyphenated UUID string and the primary key, so
/// the table holds at most one row per identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    /// Unique user ID (UUID string, CHAR(36))
    pub user_id: String,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Age in whole years
    pub age: u16,
}

/// Input for inserting a user row
///
/// `user_id` is optional; a v4 UUID is generated when absent so every stored
/// row carries a valid unique identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    /// Caller-supplied user ID, if any
    ///
    /// Must be a canonical 36-character UUID string when present
    #[validate(length(equal = 36))]
    pub user_id: Option<String>,

    /// Display name
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Email address
    #[validate(email)]
    #[validate(length(max = 255))]
    pub email: String,

    /// Age in whole years (the column is three digits wide)
    #[validate(range(min = 1, max = 999))]
    pub age: u16,
}

impl NewUser {
    /// Resolves this input into a storable record, generating a v4 UUID for
    /// the `user_id` when none was supplied
    pub fn into_record(self) -> UserRecord {
        let user_id = self
            .user_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        UserRecord {
            user_id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

impl UserRecord {
    /// Inserts a new user row
    ///
    /// A `user_id` is generated when the input has none.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `user_id` already exists (primary key violation)
    /// - Database connection fails
    pub async fn insert(pool: &MySqlPool, data: NewUser) -> Result<Self, sqlx::Error> {
        let record = data.into_record();

        sqlx::query(
            r#"
            INSERT INTO user_data (user_id, name, email, age)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.user_id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(record.age)
        .execute(pool)
        .await?;

        Ok(record)
    }

    /// Inserts a new user row unless its `user_id` is already present
    ///
    /// Uses `INSERT IGNORE`, so re-seeding the same data leaves exactly one
    /// row per key.
    ///
    /// # Returns
    ///
    /// The stored record if a row was written, `None` if the key already
    /// existed and the row was skipped
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn insert_skip_existing(
        pool: &MySqlPool,
        data: NewUser,
    ) -> Result<Option<Self>, sqlx::Error> {
        let record = data.into_record();

        let result = sqlx::query(
            r#"
            INSERT IGNORE INTO user_data (user_id, name, email, age)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.user_id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(record.age)
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            Ok(Some(record))
        } else {
            debug!(user_id = %record.user_id, "Skipping existing user row");
            Ok(None)
        }
    }

    /// Finds a user by ID
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn find_by_id(
        pool: &MySqlPool,
        user_id: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT user_id, name, email, age
            FROM user_data
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Counts rows in the `user_data` table
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn count(pool: &MySqlPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_data")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }

    /// Streams the whole table one row at a time
    ///
    /// Rows are decoded as the server produces them; the full result set is
    /// never buffered in memory.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use devstream_shared::models::user::UserRecord;
    /// # use sqlx::MySqlPool;
    /// use futures::TryStreamExt;
    ///
    /// # async fn example(pool: MySqlPool) -> Result<(), sqlx::Error> {
    /// let mut rows = UserRecord::stream(&pool);
    /// while let Some(user) = rows.try_next().await? {
    ///     println!("{}", user.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn stream(pool: &MySqlPool) -> BoxStream<'_, Result<Self, sqlx::Error>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT user_id, name, email, age
            FROM user_data
            ORDER BY user_id
            "#,
        )
        .fetch(pool)
    }

    /// Streams the table in fixed-size batches
    ///
    /// Each item is a `Vec` of up to `batch_size` rows, chunked off the
    /// row stream as it arrives. The final batch may be short.
    ///
    /// # Panics
    ///
    /// Panics if `batch_size` is zero.
    pub fn stream_batches(
        pool: &MySqlPool,
        batch_size: usize,
    ) -> impl Stream<Item = Result<Vec<Self>, sqlx::Error>> + '_ {
        assert!(batch_size > 0, "batch_size must be > 0");

        // try_chunks wraps errors with the partial chunk collected so far;
        // the partial data is dropped since an error ends consumption anyway.
        Self::stream(pool)
            .try_chunks(batch_size)
            .map_err(|e| e.1)
    }

    /// Fetches a single page of users
    ///
    /// Pages are ordered by `user_id` so that successive offsets partition
    /// the table deterministically.
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn fetch_page(
        pool: &MySqlPool,
        page_size: u32,
        offset: u64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT user_id, name, email, age
            FROM user_data
            ORDER BY user_id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page_size)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Lazily paginates the table
    ///
    /// Each page is fetched only when the consumer asks for it; pulling the
    /// first item issues the first `LIMIT/OFFSET` query and nothing more.
    /// The stream ends when a fetch returns no rows.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use devstream_shared::models::user::UserRecord;
    /// # use sqlx::MySqlPool;
    /// use futures::TryStreamExt;
    ///
    /// # async fn example(pool: MySqlPool) -> Result<(), sqlx::Error> {
    /// let mut pages = std::pin::pin!(UserRecord::paginate(&pool, 100));
    /// while let Some(page) = pages.try_next().await? {
    ///     println!("page of {} users", page.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn paginate(
        pool: &MySqlPool,
        page_size: u32,
    ) -> impl Stream<Item = Result<Vec<Self>, sqlx::Error>> + '_ {
        futures::stream::try_unfold(0u64, move |offset| async move {
            let page = Self::fetch_page(pool, page_size, offset).await?;
            if page.is_empty() {
                Ok(None)
            } else {
                let next_offset = offset + page.len() as u64;
                Ok(Some((page, next_offset)))
            }
        })
    }

    /// Streams only the `age` column
    ///
    /// Feeds aggregations that don't need whole rows.
    pub fn stream_ages(pool: &MySqlPool) -> BoxStream<'_, Result<u16, sqlx::Error>> {
        sqlx::query_scalar::<_, u16>("SELECT age FROM user_data").fetch(pool)
    }

    /// Computes the mean age without materializing the table
    ///
    /// Consumes [`stream_ages`](Self::stream_ages) one value at a time,
    /// keeping only a running total and count.
    ///
    /// # Returns
    ///
    /// `None` when the table is empty
    ///
    /// # Errors
    ///
    /// Returns an error if database connection fails
    pub async fn average_age(pool: &MySqlPool) -> Result<Option<f64>, sqlx::Error> {
        let mut ages = Self::stream_ages(pool);

        let mut total: u64 = 0;
        let mut count: u64 = 0;

        while let Some(age) = ages.try_next().await? {
            total += u64::from(age);
            count += 1;
        }

        if count == 0 {
            Ok(None)
        } else {
            Ok(Some(total as f64 / count as f64))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_record_generates_uuid_when_missing() {
        let record = NewUser {
            user_id: None,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            age: 30,
        }
        .into_record();

        // Generated ID must be a valid canonical UUID
        assert!(Uuid::parse_str(&record.user_id).is_ok());
        assert_eq!(record.user_id.len(), 36);
        assert_eq!(record.name, "Test User");
        assert_eq!(record.age, 30);
    }

    #[test]
    fn test_into_record_preserves_supplied_id() {
        let id = "00000000-0000-4000-8000-000000000001";
        let record = NewUser {
            user_id: Some(id.to_string()),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            age: 30,
        }
        .into_record();

        assert_eq!(record.user_id, id);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let make = || {
            NewUser {
                user_id: None,
                name: "n".to_string(),
                email: "e@example.com".to_string(),
                age: 1,
            }
            .into_record()
        };

        assert_ne!(make().user_id, make().user_id);
    }

    // Integration tests for database operations are in tests/user_flow_tests.rs
}
