//! # request-client
//!
//! A minimal HTTP client facade over `reqwest`: GET, POST and a generic verb,
//! optional per-call headers and cookies, and a fixed 10-second timeout.
//!
//! ## Architecture
//!
//! 1. **Options** — `RequestOptions` / `Cookie` records supplied per call
//! 2. **Preparation** — `PreparedRequest` validates method, URL and headers without I/O
//! 3. **Clients** — async `Client` and, with the `blocking` feature, a blocking twin
//!
//! Any HTTP status is a successful call; only construction, transport and
//! body-read failures are errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use request_client::prelude::*;
//!
//! let client = Client::new();
//!
//! let opts = RequestOptions::new()
//!     .header("Accept", "application/json")
//!     .cookie(Cookie::new("session", "abc123"));
//!
//! let body = client.get("https://example.com/api/items", Some(&opts)).await?;
//! let body = client.post("https://example.com/api/items", br#"{"a":1}"#, None).await?;
//! let body = client.request("DELETE", "https://example.com/api/items/1", &[], None).await?;
//! ```

// ── Core ─────────────────────────────────────────────────────────────────────

/// Error types and failure stages.
pub mod error;

/// Per-call headers and cookies.
pub mod options;

// ── HTTP ─────────────────────────────────────────────────────────────────────

/// Request preparation and the async / blocking clients.
pub mod http;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::error::{ConstructionError, ErrorStage, HttpError};
    pub use crate::http::{Client, REQUEST_TIMEOUT};
    pub use crate::options::{Cookie, RequestOptions};
}

pub use error::{ErrorStage, HttpError};
pub use http::Client;
pub use options::{Cookie, RequestOptions};
