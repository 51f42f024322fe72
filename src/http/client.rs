//! Async client — `Client` with GET, POST and generic verb entry points.
//!
//! Every call is a single request/response exchange. Non-2xx responses are
//! returned as successful calls carrying the response body.

use crate::error::{ConstructionError, HttpError};
use crate::http::request::PreparedRequest;
use crate::http::REQUEST_TIMEOUT;
use crate::options::RequestOptions;

use bytes::Bytes;
use tracing;

/// Reusable HTTP client handle.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    transport: reqwest::Client,
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
        let transport = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ConstructionError::Builder)?;
        Ok(Self { transport })
    }

    /// Wrap a caller-built transport. Its timeout and pool settings apply
    /// as configured.
    pub fn with_transport(transport: reqwest::Client) -> Self {
        Self { transport }
    }

    /// GET `url` and return the full response body, whatever the status.
    pub async fn get(
        &self,
        url: &str,
        options: Option<&RequestOptions>,
    ) -> Result<Bytes, HttpError> {
        self.request("GET", url, &[], options).await
    }

    /// POST `payload` as the raw body to `url`.
    pub async fn post(
        &self,
        url: &str,
        payload: &[u8],
        options: Option<&RequestOptions>,
    ) -> Result<Bytes, HttpError> {
        self.request("POST", url, payload, options).await
    }

    /// Issue a request with an arbitrary method. An empty `method` means GET.
    pub async fn request(
        &self,
        method: &str,
        url: &str,
        payload: &[u8],
        options: Option<&RequestOptions>,
    ) -> Result<Bytes, HttpError> {
        let prepared = PreparedRequest::new(method, url, payload, options)?;
        self.execute(prepared).await
    }

    async fn execute(&self, prepared: PreparedRequest) -> Result<Bytes, HttpError> {
        let PreparedRequest {
            method,
            url,
            headers,
            body,
        } = prepared;

        tracing::debug!(
            %method,
            %url,
            headers = headers.len(),
            body_len = body.as_ref().map_or(0, Bytes::len),
            "Sending request"
        );

        let mut req = self.transport.request(method.clone(), url.clone()).headers(headers);
        if let Some(b) = body {
            req = req.body(b);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::debug!(%method, %url, error = %e, "Request failed");
            HttpError::from_send(e)
        })?;
        let status = resp.status();

        let bytes = resp.bytes().await.map_err(|e| {
            tracing::debug!(%method, %url, status = status.as_u16(), error = %e, "Body read failed");
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
