//! Request preparation — validation and option merging, no I/O.
//!
//! Both the async and the blocking client go through [`PreparedRequest`], so a
//! malformed URL, method or header is rejected before a connection is opened.

use crate::error::ConstructionError;
use crate::options::RequestOptions;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, COOKIE};
use reqwest::{Method, Url};

/// A fully validated request, ready to hand to a transport.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
}

impl PreparedRequest {
    pub fn new(
        method: &str,
        url: &str,
        payload: &[u8],
        options: Option<&RequestOptions>,
    ) -> Result<Self, ConstructionError> {
        let method = parse_method(method)?;
        let url = parse_url(url)?;
        let mut headers = match options {
            Some(opts) => build_headers(opts)?,
            None => HeaderMap::new(),
        };
        let body = (!payload.is_empty()).then(|| Bytes::copy_from_slice(payload));
        // An empty POST/PUT/PATCH still announces its (zero) length.
        if body.is_none() && expects_body(&method) && !headers.contains_key(CONTENT_LENGTH) {
            headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        }

        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }
}

fn parse_method(method: &str) -> Result<Method, ConstructionError> {
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes())
        .map_err(|_| ConstructionError::InvalidMethod(method.to_string()))
}

fn parse_url(raw: &str) -> Result<Url, ConstructionError> {
    let url = Url::parse(raw).map_err(|e| ConstructionError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ConstructionError::UnsupportedScheme(other.to_string())),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConstructionError::InvalidUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(url)
}

fn expects_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

fn build_headers(opts: &RequestOptions) -> Result<HeaderMap, ConstructionError> {
    let mut headers = HeaderMap::new();

    for (name, value) in &opts.headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConstructionError::InvalidHeaderName(name.clone()))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ConstructionError::InvalidHeaderValue(name.clone()))?;
        // `insert` replaces any previous value under the same name.
        headers.insert(header_name, header_value);
    }

    if !opts.cookies.is_empty() {
        // Built from raw bytes so an explicit non-ASCII `Cookie` header survives.
        let mut value: Vec<u8> = headers
            .get(COOKIE)
            .map(|v| v.as_bytes().to_vec())
            .unwrap_or_default();
        for cookie in &opts.cookies {
            let pair = cookie.header_pair();
            HeaderValue::from_str(&pair)
                .map_err(|_| ConstructionError::InvalidCookie(cookie.name.clone()))?;
            if !value.is_empty() {
                value.extend_from_slice(b"; ");
            }
            value.extend_from_slice(pair.as_bytes());
        }
        let value = HeaderValue::from_bytes(&value)
            .map_err(|_| ConstructionError::InvalidHeaderValue(COOKIE.to_string()))?;
        headers.insert(COOKIE, value);
    }

    Ok(headers)
}
