//! HTTP layer — request preparation plus async and blocking clients.

pub mod client;
pub mod request;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use client::Client;
pub use request::PreparedRequest;

use std::time::Duration;

/// Total per-request timeout: request start through the last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
