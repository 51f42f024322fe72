//! Error types for the request facade.
//!
//! Every failure is reported at the stage where it happened: building the
//! request, talking to the server, or draining the response body.

use thiserror::Error;

/// Top-level error returned by every client call.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid request: {0}")]
    Construction(#[from] ConstructionError),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),
}

/// Reasons a request could not be built. None of these touch the network.
#[derive(Error, Debug)]
pub enum ConstructionError {
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),

    #[error("invalid HTTP method {0:?}")]
    InvalidMethod(String),

    #[error("invalid header name {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid value for header {0:?}")]
    InvalidHeaderValue(String),

    #[error("cookie {0:?} cannot be encoded as a header value")]
    InvalidCookie(String),

    #[error("{0}")]
    Builder(#[source] reqwest::Error),
}

/// The stage of a call at which an [`HttpError`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Construction,
    Transport,
    BodyRead,
}

impl HttpError {
    pub fn stage(&self) -> ErrorStage {
        match self {
            HttpError::Construction(_) => ErrorStage::Construction,
            HttpError::Transport(_) => ErrorStage::Transport,
            HttpError::BodyRead(_) => ErrorStage::BodyRead,
        }
    }

    /// True when the fixed request timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        match self {
            HttpError::Transport(e) | HttpError::BodyRead(e) => e.is_timeout(),
            HttpError::Construction(_) => false,
        }
    }

    /// Classify a failure from `send()`.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            HttpError::Construction(ConstructionError::Builder(err))
        } else {
            HttpError::Transport(err)
        }
    }

    /// Classify a failure while reading the body. The timeout spans the whole
    /// exchange, so an expired deadline stays a transport failure.
    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Transport(err)
        } else {
            HttpError::BodyRead(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_stage() {
        let err: HttpError = ConstructionError::InvalidMethod("BAD METHOD".into()).into();
        assert_eq!(err.stage(), ErrorStage::Construction);
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_construction_display_names_the_input() {
        let err: HttpError = ConstructionError::InvalidUrl {
            url: "not a url".into(),
            reason: "relative URL without a base".into(),
        }
        .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid request:"));
        assert!(msg.contains("not a url"));
    }
}
