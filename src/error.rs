use crate::error_code::ResponseError;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for argument and configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "campaign.name", "config.base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected format, offending value)
    pub details: Option<String>,
    /// Source of the error (e.g., "campaign_validator", "config_loader")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the SDK.
///
/// Every call surfaces exactly one of these kinds. Nothing is retried or
/// swallowed inside the request pipeline; the caller decides what to do next.
#[derive(Debug, Error)]
pub enum Error {
    /// The bearer token was missing or blank. Raised before any request is built.
    #[error("Authentication error: {message}")]
    Auth { message: String },

    /// One or more required fields were missing. `message` joins every violation with ", ".
    #[error("Invalid argument: {message}{}", format_context(.context))]
    Argument {
        message: String,
        violations: Vec<String>,
        context: ErrorContext,
    },

    /// The server answered with a status >= 300.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The transport failed before a response was available.
    #[error("Execution error: {0}")]
    Execution(#[from] TransportError),

    /// The response payload could not be parsed into the expected shape.
    #[error("Decoding error: {message}")]
    Decoding { message: String },

    /// The request payload could not be rendered to JSON.
    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn auth(msg: impl Into<String>) -> Self {
        Error::Auth {
            message: msg.into(),
        }
    }

    /// Build an argument error out of every violation found by a validator.
    pub fn argument(violations: Vec<String>, context: ErrorContext) -> Self {
        Error::Argument {
            message: violations.join(", "),
            violations,
            context,
        }
    }

    pub fn decoding(msg: impl Into<String>) -> Self {
        Error::Decoding {
            message: msg.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Argument { context, .. } | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status of a response error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Response(err) => Some(err.status),
            _ => None,
        }
    }
}
