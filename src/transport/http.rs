use super::request::{AuthenticatedRequest, HttpMethod, MultipartPart, RequestBody, CONTENT_TYPE};
use super::{ResponseEnvelope, Transport};
use crate::config::SdkConfig;
use crate::{Error, Result};
use reqwest::blocking::{multipart, Client};
use reqwest::{Method, Proxy};
use std::time::Instant;
use tracing::debug;

/// Blocking HTTP transport backed by `reqwest`.
///
/// The underlying client owns its connection pool; clone the surrounding
/// `Arc` to share it between clients.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &SdkConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout()))
            .user_agent(config.user_agent.clone());

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::configuration(format!("invalid proxy url: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing client, keeping whatever timeouts it was built with.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn multipart_form(parts: &[MultipartPart]) -> std::result::Result<multipart::Form, TransportError> {
        let mut form = multipart::Form::new();
        for part in parts {
            form = match part {
                MultipartPart::Text { name, value } => form.text(name.clone(), value.clone()),
                MultipartPart::File(file) => {
                    let part = multipart::Part::bytes(file.bytes.clone())
                        .file_name(file.file_name.clone())
                        .mime_str(&file.content_type)
                        .map_err(TransportError::Http)?;
                    form.part(file.field_name.clone(), part)
                }
            };
        }
        Ok(form)
    }
}

impl Transport for HttpTransport {
    fn execute(
        &self,
        request: &AuthenticatedRequest,
    ) -> std::result::Result<ResponseEnvelope, TransportError> {
        let is_multipart = matches!(request.body, Some(RequestBody::Multipart(_)));
        let mut builder = self
            .client
            .request(Self::method(request.method), &request.url);

        for (name, value) in &request.headers {
            // reqwest writes the multipart Content-Type itself, boundary included.
            if is_multipart && name.eq_ignore_ascii_case(CONTENT_TYPE) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder = match &request.body {
            None => builder,
            Some(RequestBody::Json(text)) => builder.body(text.clone()),
            Some(RequestBody::Form(fields)) => builder.body(
                url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields)
                    .finish(),
            ),
            Some(RequestBody::Multipart(parts)) => builder.multipart(Self::multipart_form(parts)?),
        };

        let start = Instant::now();
        let response = builder.send().map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(TransportError::Http)?;

        debug!(
            method = request.method.as_str(),
            url = request.url.as_str(),
            http_status = status,
            duration_ms = start.elapsed().as_millis() as u64,
            "request executed"
        );

        Ok(ResponseEnvelope::new(status, body))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
