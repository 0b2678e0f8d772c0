//! # devstream Shared Library
//!
//! This crate contains the data layer shared by the devstream command-line
//! tools: connection pooling, schema bootstrap, the `user_data` model with
//! its streaming query surface, and CSV ingest.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and schema bootstrap for the MySQL backend
//! - `models`: Database models and their query operations
//! - `ingest`: CSV parsing and validation for the seeding pipeline

pub mod db;
pub mod ingest;
pub mod models;

/// Current version of the devstream shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
