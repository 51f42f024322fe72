//! Blocking client — same contract as [`crate::http::Client`], but each call
//! blocks the calling thread until the exchange finishes or times out.
//!
//! Must not be constructed or dropped inside an async runtime; wrap calls in
//! `tokio::task::spawn_blocking` there.

use crate::error::{ConstructionError, HttpError};
use crate::http::request::PreparedRequest;
use crate::http::REQUEST_TIMEOUT;
use crate::options::RequestOptions;

use bytes::Bytes;

/// Reusable blocking HTTP client handle.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    transport: reqwest::blocking::Client,
}

impl Client {
    /// Create a client with the fixed [`REQUEST_TIMEOUT`].
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialised. Use [`Client::try_new`]
    /// to handle that case.
    pub fn new() -> Self {
        Self::try_new().expect("Failed to build HTTP client")
    }

    /// Like [`Client::new`], but returns a construction error instead of
    /// panicking.
    pub fn try_new() -> Result<Self, HttpError> {
        let transport = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ConstructionError::Builder)?;
        Ok(Self { transport })
    }

    /// Wrap a caller-built transport. Its timeout and pool settings apply
    /// as configured.
    pub fn with_transport(transport: reqwest::blocking::Client) -> Self {
        Self { transport }
    }

    /// GET `url` and return the full response body, whatever the status.
    pub fn get(&self, url: &str, options: Option<&RequestOptions>) -> Result<Bytes, HttpError> {
        self.request("GET", url, &[], options)
    }

    /// POST `payload` as the raw body to `url`.
    pub fn post(
        &self,
        url: &str,
        payload: &[u8],
        options: Option<&RequestOptions>,
    ) -> Result<Bytes, HttpError> {
        self.request("POST", url, payload, options)
    }

    /// Issue a request with an arbitrary method. An empty `method` means GET.
    pub fn request(
        &self,
        method: &str,
        url: &str,
        payload: &[u8],
        options: Option<&RequestOptions>,
    ) -> Result<Bytes, HttpError> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = PreparedRequest::new(method, url, payload, options)?;

        tracing::debug!(
            %method,
            %url,
            headers = headers.len(),
            body_len = body.as_ref().map_or(0, Bytes::len),
            "Sending blocking request"
        );

        let mut req = self.transport.request(method.clone(), url.clone()).headers(headers);
        if let Some(b) = body {
            req = req.body(b);
        }

        let resp = req.send().map_err(|e| {
            tracing::debug!(%method, %url, error = %e, "Request failed");
            HttpError::from_send(e)
        })?;
        let status = resp.status();

        let bytes = resp.bytes().map_err(|e| {
            tracing::debug!(%method, %url, error = %e, "Body read failed");
            HttpError::from_body(e)
        })?;

        tracing::debug!(
            %method,
            %url,
            status = status.as_u16(),
            bytes = bytes.len(),
            "Request complete"
        );
        Ok(bytes)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
