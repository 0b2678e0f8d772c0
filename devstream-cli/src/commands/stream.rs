/// `devstream stream`: print users one row at a time
///
/// Rows are printed as they arrive from the server; nothing is buffered,
/// so the command handles tables of any size in constant memory.

use crate::cli::StreamArgs;
use crate::commands::connect;
use crate::config::Config;
use devstream_shared::db::pool::close_pool;
use devstream_shared::models::user::UserRecord;
use futures::TryStreamExt;

pub async fn run(config: &Config, args: &StreamArgs) -> anyhow::Result<()> {
    let pool = connect(config).await?;

    let mut printed = 0u64;
    {
        let mut rows = UserRecord::stream(&pool);
        while let Some(user) = rows.try_next().await? {
            println!("{}", serde_json::to_string(&user)?);
            printed += 1;

            if args.limit.is_some_and(|limit| printed >= limit) {
                break;
            }
        }
    }

    println!("{} users streamed", printed);

    close_pool(pool).await;
    Ok(())
}
