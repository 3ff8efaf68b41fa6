//! 传输层：请求构造与阻塞式 HTTP 执行。
//!
//! Transport layer.
//!
//! [`request`] builds [`AuthenticatedRequest`] values without touching the
//! network. A [`Transport`] executes them and hands back a
//! [`ResponseEnvelope`]. The default transport is [`HttpTransport`], a thin
//! wrapper over a blocking `reqwest` client; tests plug in their own.

pub mod http;
pub mod request;

pub use http::{HttpTransport, TransportError};
pub use request::{
    build_delete, build_delete_with_body, build_form_post, build_get, build_multipart_upload,
    build_post, build_put, AuthenticatedRequest, HttpMethod, MultipartPart, RequestBody,
    UploadFile,
};

/// Status and raw body of an executed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub body: Option<String>,
}

impl ResponseEnvelope {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            status,
            body: if body.is_empty() { None } else { Some(body) },
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        crate::error_code::is_success(self.status)
    }

    /// Turn a failed status into a classified [`crate::Error::Response`].
    pub fn error_for_status(self) -> crate::Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(crate::error_code::classify(self.status)
                .with_body(self.body)
                .into())
        }
    }
}

/// Executes one request and returns its envelope.
///
/// Implementations must not retry: a failure is reported exactly once.
/// Any status code, including >= 300, is a successful execution.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: &AuthenticatedRequest,
    ) -> std::result::Result<ResponseEnvelope, TransportError>;
}
