/// Command-line argument definitions
///
/// One subcommand per operation: `seed` bootstraps and imports, the
/// reporting commands (`stream`, `batch`, `pages`, `average-age`) consume
/// the table lazily, and `org` inspects a GitHub organization.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Seed and stream the `user_data` table, inspect GitHub organizations
#[derive(Debug, Parser)]
#[command(name = "devstream", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the database and table if needed, then import users from CSV
    Seed(SeedArgs),

    /// Print users one row at a time
    Stream(StreamArgs),

    /// Print users in fixed-size batches, keeping those over an age threshold
    Batch(BatchArgs),

    /// Print users page by page via lazy pagination
    Pages(PagesArgs),

    /// Print the mean age of all users
    AverageAge,

    /// Show a GitHub organization, or list its public repositories
    Org(OrgArgs),
}

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Path to the CSV file to import (columns: user_id, name, email, age)
    #[arg(long, default_value = "user_data.csv")]
    pub csv: PathBuf,
}

#[derive(Debug, Args)]
pub struct StreamArgs {
    /// Stop after printing this many rows
    #[arg(long)]
    pub limit: Option<u64>,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Rows per batch
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub batch_size: u32,

    /// Only print users strictly older than this
    #[arg(long, default_value_t = 25)]
    pub min_age: u16,
}

#[derive(Debug, Args)]
pub struct PagesArgs {
    /// Rows per page
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: u32,
}

#[derive(Debug, Args)]
pub struct OrgArgs {
    /// Organization name (e.g. "rust-lang")
    pub org: String,

    /// List public repositories instead of showing org metadata
    #[arg(long)]
    pub repos: bool,

    /// With --repos, only list repositories under this license key
    /// (e.g. "apache-2.0")
    #[arg(long, requires = "repos")]
    pub license: Option<String>,
}
