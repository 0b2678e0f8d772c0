/// `devstream batch`: consume the table in fixed-size batches
///
/// Each batch is filtered to users strictly older than the threshold
/// before printing, mirroring batch jobs that post-process chunks as they
/// arrive rather than after a full load.

use crate::cli::BatchArgs;
use crate::commands::connect;
use crate::config::Config;
use devstream_shared::db::pool::close_pool;
use devstream_shared::models::user::UserRecord;
use futures::TryStreamExt;

pub async fn run(config: &Config, args: &BatchArgs) -> anyhow::Result<()> {
    let pool = connect(config).await?;

    let mut batches = 0u64;
    let mut matched = 0u64;
    {
        let mut stream = UserRecord::stream_batches(&pool, args.batch_size as usize);
        while let Some(batch) = stream.try_next().await? {
            batches += 1;

            for user in batch.into_iter().filter(|u| u.age > args.min_age) {
                println!("{}", serde_json::to_string(&user)?);
                matched += 1;
            }
        }
    }

    println!(
        "{} users over age {} across {} batches",
        matched, args.min_age, batches
    );

    close_pool(pool).await;
    Ok(())
}
