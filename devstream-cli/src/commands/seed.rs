/// `devstream seed`: bootstrap the database and import users from CSV
///
/// Creates the database and the `user_data` table when missing, then loads
/// the CSV and inserts row by row, skipping keys that already exist. The
/// import is idempotent: re-running it against the same file adds nothing.

use crate::cli::SeedArgs;
use crate::commands::connect;
use crate::config::Config;
use anyhow::Context;
use devstream_shared::db::pool::close_pool;
use devstream_shared::db::schema::{create_user_data_table, ensure_database_exists};
use devstream_shared::ingest::load_users_csv;
use devstream_shared::models::user::UserRecord;
use tracing::info;

pub async fn run(config: &Config, args: &SeedArgs) -> anyhow::Result<()> {
    let url = config.require_database_url()?;

    ensure_database_exists(url)
        .await
        .context("failed to create the database")?;

    let pool = connect(config).await?;

    create_user_data_table(&pool)
        .await
        .context("failed to create the user_data table")?;

    let existing = UserRecord::count(&pool).await?;
    if existing > 0 {
        info!(existing, "user_data already holds rows; only new keys will be added");
    }

    let report = load_users_csv(&args.csv)
        .with_context(|| format!("failed to load {}", args.csv.display()))?;

    let mut inserted = 0usize;
    let mut duplicates = 0usize;

    for record in report.records {
        match UserRecord::insert_skip_existing(&pool, record).await? {
            Some(_) => inserted += 1,
            None => duplicates += 1,
        }
    }

    info!(inserted, duplicates, skipped = report.skipped, "Seeding complete");
    println!(
        "Inserted {} users ({} already present, {} invalid rows skipped)",
        inserted, duplicates, report.skipped
    );

    close_pool(pool).await;
    Ok(())
}
