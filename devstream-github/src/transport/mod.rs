/// Transport seam for API access
///
/// This module defines the contract the org client uses to reach the
/// GitHub API, plus its implementations.
///
/// # Architecture
///
/// All network access goes through the `ApiTransport` trait. The client
/// never touches a socket directly, so tests substitute a transport that
/// returns fixed payloads and the rest of the code is exercised unchanged.
///
/// # Transport Types
///
/// - **Http**: reqwest-backed transport for the real API
/// - **Mock**: canned responses with call recording, for tests and demos
///
/// # Example
///
/// ```no_run
/// use devstream_github::transport::{ApiTransport, HttpTransport};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = HttpTransport::new(None)?;
/// let payload = transport.get_json("https://api.github.com/orgs/rust-lang").await?;
/// println!("{}", payload["login"]);
/// # Ok(())
/// # }
/// ```

pub mod api;
pub mod http;
pub mod mock;

// Re-export main types
pub use api::{ApiTransport, TransportError, TransportResult};
pub use http::HttpTransport;
pub use mock::MockTransport;
