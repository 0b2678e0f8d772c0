//! # devstream GitHub Client
//!
//! This library provides a small client for the GitHub organization API:
//! org metadata, the public repository listing, and license-filtered repo
//! names. All HTTP access goes through a transport seam so tests can
//! substitute fixed responses for the network.
//!
//! ## Modules
//!
//! - `transport`: The `ApiTransport` seam with HTTP and mock implementations
//! - `nested`: Path lookup in nested JSON payloads
//! - `client`: The `OrgClient` with memoized payload properties
//!
//! ## Example
//!
//! ```no_run
//! use devstream_github::client::OrgClient;
//! use devstream_github::transport::HttpTransport;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = Arc::new(HttpTransport::new(None)?);
//! let client = OrgClient::new("rust-lang", transport);
//!
//! let repos = client.public_repos(None).await?;
//! println!("{} public repos", repos.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod nested;
pub mod transport;
