//! 状态码分类：将 HTTP 状态码映射为带固定消息的类型化错误。
//!
//! HTTP status classification.
//!
//! Every status code >= 300 maps to exactly one [`StatusKind`] and one fixed
//! message. The messages are part of the public contract and are matched
//! verbatim by callers.
//!
//! | Status | Kind                  | Message                                |
//! |--------|-----------------------|----------------------------------------|
//! | 400    | `BadRequest`          | Bad Request                            |
//! | 401    | `Unauthorized`        | Unauthorized - Check your API key      |
//! | 403    | `Forbidden`           | Access Forbidden                       |
//! | 404    | `NotFound`            | Not Found                              |
//! | 405    | `MethodNotAllowed`    | Method Not Allowed                     |
//! | 406    | `NotAcceptable`       | Not Acceptable                         |
//! | 410    | `Gone`                | Gone                                   |
//! | 418    | `Teapot`              | I'm a teapot                           |
//! | 429    | `TooManyRequests`     | Too Many Requests / Rate limit reached |
//! | 500    | `InternalServerError` | Internal Server Error                  |
//! | 503    | `ServiceUnavailable`  | Service Unavailable                    |
//! | other  | `Other(code)`         | Error {code}                           |
//!
//! ## Example
//!
//! ```rust
//! use snapads_rust::error_code::{classify, StatusKind};
//!
//! let err = classify(429);
//! assert_eq!(err.kind, StatusKind::TooManyRequests);
//! assert_eq!(err.to_string(), "Too Many Requests / Rate limit reached");
//! assert_eq!(classify(1337).to_string(), "Error 1337");
//! ```

use std::fmt;

/// Typed kind of a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    Gone,
    Teapot,
    TooManyRequests,
    InternalServerError,
    ServiceUnavailable,
    /// Any status without a dedicated entry in [`STATUS_TABLE`].
    Other(u16),
}

/// Ordered status table. Lookups scan it front to back; a miss falls back to
/// [`StatusKind::Other`].
pub const STATUS_TABLE: &[(u16, StatusKind, &str)] = &[
    (400, StatusKind::BadRequest, "Bad Request"),
    (401, StatusKind::Unauthorized, "Unauthorized - Check your API key"),
    (403, StatusKind::Forbidden, "Access Forbidden"),
    (404, StatusKind::NotFound, "Not Found"),
    (405, StatusKind::MethodNotAllowed, "Method Not Allowed"),
    (406, StatusKind::NotAcceptable, "Not Acceptable"),
    (410, StatusKind::Gone, "Gone"),
    (418, StatusKind::Teapot, "I'm a teapot"),
    (429, StatusKind::TooManyRequests, "Too Many Requests / Rate limit reached"),
    (500, StatusKind::InternalServerError, "Internal Server Error"),
    (503, StatusKind::ServiceUnavailable, "Service Unavailable"),
];

impl StatusKind {
    /// Maps an HTTP status code to its kind. Total over `u16`.
    pub fn from_http_status(status: u16) -> Self {
        STATUS_TABLE
            .iter()
            .find(|(code, _, _)| *code == status)
            .map(|(_, kind, _)| *kind)
            .unwrap_or(StatusKind::Other(status))
    }

    /// Returns the fixed, human-readable message for this kind.
    pub fn message(&self) -> String {
        match self {
            StatusKind::Other(code) => format!("Error {}", code),
            kind => STATUS_TABLE
                .iter()
                .find(|(_, k, _)| k == kind)
                .map(|(_, _, msg)| (*msg).to_string())
                .unwrap_or_default(),
        }
    }

    /// Short snake_case name, used as a structured logging field.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::MethodNotAllowed => "method_not_allowed",
            Self::NotAcceptable => "not_acceptable",
            Self::Gone => "gone",
            Self::Teapot => "teapot",
            Self::TooManyRequests => "too_many_requests",
            Self::InternalServerError => "internal_server_error",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Other(_) => "other",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A response that came back with status >= 300.
///
/// `Display` prints only the fixed message; the raw body is kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ResponseError {
    pub status: u16,
    pub kind: StatusKind,
    pub message: String,
    pub body: Option<String>,
}

impl ResponseError {
    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body.filter(|b| !b.is_empty());
        self
    }
}

/// Classify a failed status code into a [`ResponseError`].
pub fn classify(status: u16) -> ResponseError {
    let kind = StatusKind::from_http_status(status);
    ResponseError {
        status,
        kind,
        message: kind.message(),
        body: None,
    }
}

/// Statuses below 300 are successes; everything else is a failure.
#[inline]
pub fn is_success(status: u16) -> bool {
    status < 300
}
