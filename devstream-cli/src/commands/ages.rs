/// `devstream average-age`: streamed mean age
///
/// The mean is computed from the age stream with a running total and
/// count; the table is never materialized.

use crate::commands::connect;
use crate::config::Config;
use devstream_shared::db::pool::close_pool;
use devstream_shared::models::user::UserRecord;

pub async fn run(config: &Config) -> anyhow::Result<()> {
    let pool = connect(config).await?;

    match UserRecord::average_age(&pool).await? {
        Some(average) => println!("Average age of users: {:.2}", average),
        None => println!("No users found"),
    }

    close_pool(pool).await;
    Ok(())
}
