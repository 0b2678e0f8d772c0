/// `devstream pages`: walk the table through lazy pagination
///
/// Each page is a separate `LIMIT/OFFSET` query issued only when the
/// previous page has been printed, so stopping early leaves the remaining
/// pages unfetched.

use crate::cli::PagesArgs;
use crate::commands::connect;
use crate::config::Config;
use devstream_shared::db::pool::close_pool;
use devstream_shared::models::user::UserRecord;
use futures::TryStreamExt;

pub async fn run(config: &Config, args: &PagesArgs) -> anyhow::Result<()> {
    let pool = connect(config).await?;

    let mut page_number = 0u64;
    {
        let mut pages = std::pin::pin!(UserRecord::paginate(&pool, args.page_size));
        while let Some(page) = pages.try_next().await? {
            page_number += 1;
            println!("-- page {} ({} users)", page_number, page.len());

            for user in &page {
                println!("{}", serde_json::to_string(user)?);
            }
        }
    }

    println!("{} pages total", page_number);

    close_pool(pool).await;
    Ok(())
}
