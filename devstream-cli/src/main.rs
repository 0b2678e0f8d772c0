//! # devstream CLI
//!
//! Command-line front end for the devstream tools: seeding the `user_data`
//! table from CSV, streaming and aggregating it lazily, and inspecting
//! GitHub organizations.
//!
//! ## Usage
//!
//! ```bash
//! devstream seed --csv user_data.csv
//! devstream stream --limit 10
//! devstream batch --batch-size 50 --min-age 25
//! devstream pages --page-size 100
//! devstream average-age
//! devstream org rust-lang --repos --license apache-2.0
//! ```

use clap::Parser;
use devstream_cli::cli::{Cli, Command};
use devstream_cli::commands;
use devstream_cli::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "devstream_cli=info,devstream_shared=info,devstream_github=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Command::Seed(args) => commands::seed::run(&config, &args).await,
        Command::Stream(args) => commands::stream::run(&config, &args).await,
        Command::Batch(args) => commands::batch::run(&config, &args).await,
        Command::Pages(args) => commands::pages::run(&config, &args).await,
        Command::AverageAge => commands::ages::run(&config).await,
        Command::Org(args) => commands::org::run(&config, &args).await,
    }
}
