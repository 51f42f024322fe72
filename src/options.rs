//! Per-call request options: extra headers and cookies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A bundle of per-call header and cookie overrides.
///
/// Headers are applied in order; a later header replaces an earlier one with
/// the same (case-insensitive) name. Cookies are all sent, in order.
///
/// ```rust,ignore
/// let opts = RequestOptions::new()
///     .header("Accept", "application/json")
///     .cookie(Cookie::new("session", "abc123"));
/// let body = client.get("https://example.com/api", Some(&opts)).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    #[serde(default)]
    pub headers: Vec<(String, String)>,
    #[serde(default)]
    pub cookies: Vec<Cookie>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn cookie(mut self, cookie: Cookie) -> Self {
        self.cookies.push(cookie);
        self
    }

    /// Append `other` after `self`: its headers override ours on collision
    /// and its cookies follow ours.
    pub fn merge(mut self, other: RequestOptions) -> Self {
        self.headers.extend(other.headers);
        self.cookies.extend(other.cookies);
        self
    }

    /// Fold several option records into one, in iteration order.
    pub fn merged(records: impl IntoIterator<Item = RequestOptions>) -> Self {
        records.into_iter().fold(Self::default(), Self::merge)
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.cookies.is_empty()
    }
}

/// A cookie to attach to an outgoing request.
///
/// Only `name=value` is sent. The remaining attributes are carried through
/// untouched for callers that round-trip cookies from a `Set-Cookie` source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub http_only: bool,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// The `name=value` pair as written into a `Cookie` request header.
    pub fn header_pair(&self) -> String {
        format!(
            "{}={}",
            sanitize_name(&self.name),
            sanitize_value(&self.value)
        )
    }
}

fn sanitize_name(name: &str) -> String {
    name.replace(['\n', '\r'], "-")
}

// RFC 6265 cookie-octet, plus space and comma which force quoting.
fn is_value_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b'"' && b != b';' && b != b'\\'
}

fn sanitize_value(value: &str) -> String {
    let clean: String = value
        .chars()
        .filter(|c| c.is_ascii() && is_value_byte(*c as u8))
        .collect();
    if clean.contains([' ', ',']) {
        format!("\"{}\"", clean)
    } else {
        clean
    }
}
