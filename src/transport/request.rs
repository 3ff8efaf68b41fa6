//! Authenticated request construction.
//!
//! Pure constructors: every `build_*` function returns an immutable
//! [`AuthenticatedRequest`] and never performs I/O. Protected endpoints
//! require a non-blank bearer token; a missing token is rejected here, before
//! anything reaches the transport.

use crate::{Error, Result};
use serde::Serialize;
use std::path::Path;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";
pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file attached to a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Form field name; the media upload endpoint expects `file`.
    pub field_name: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            field_name: "file".to_string(),
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk; the MIME type is inferred from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            Error::configuration_with_context(
                format!("cannot read upload file: {}", e),
                crate::ErrorContext::new()
                    .with_field_path(path.display().to_string())
                    .with_source("upload_file"),
            )
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartPart {
    Text { name: String, value: String },
    File(UploadFile),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Serialized JSON document.
    Json(String),
    /// Form fields, url-encoded by the transport.
    Form(Vec<(String, String)>),
    Multipart(Vec<MultipartPart>),
}

/// A fully built request, ready for a [`super::Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl AuthenticatedRequest {
    /// First header value with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The JSON text of the body, if the body is JSON.
    pub fn json_body(&self) -> Option<&str> {
        match &self.body {
            Some(RequestBody::Json(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

fn bearer(token: Option<&str>) -> Result<(String, String)> {
    match token.map(str::trim) {
        Some(token) if !token.is_empty() => {
            Ok((AUTHORIZATION.to_string(), format!("Bearer {}", token)))
        }
        _ => Err(Error::auth("The OAuth access token is required")),
    }
}

fn to_json<T: Serialize + ?Sized>(payload: &T) -> Result<String> {
    serde_json::to_string(payload).map_err(Error::Serialization)
}

fn with_json(
    method: HttpMethod,
    url: &str,
    token: Option<&str>,
    payload: &(impl Serialize + ?Sized),
) -> Result<AuthenticatedRequest> {
    let auth = bearer(token)?;
    let body = to_json(payload)?;
    Ok(AuthenticatedRequest {
        method,
        url: url.to_string(),
        headers: vec![
            auth,
            (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
        ],
        body: Some(RequestBody::Json(body)),
    })
}

fn without_body(method: HttpMethod, url: &str, token: Option<&str>) -> Result<AuthenticatedRequest> {
    Ok(AuthenticatedRequest {
        method,
        url: url.to_string(),
        headers: vec![bearer(token)?],
        body: None,
    })
}

pub fn build_get(url: &str, token: Option<&str>) -> Result<AuthenticatedRequest> {
    without_body(HttpMethod::Get, url, token)
}

pub fn build_post(
    url: &str,
    token: Option<&str>,
    payload: &(impl Serialize + ?Sized),
) -> Result<AuthenticatedRequest> {
    with_json(HttpMethod::Post, url, token, payload)
}

pub fn build_put(
    url: &str,
    token: Option<&str>,
    payload: &(impl Serialize + ?Sized),
) -> Result<AuthenticatedRequest> {
    with_json(HttpMethod::Put, url, token, payload)
}

pub fn build_delete(url: &str, token: Option<&str>) -> Result<AuthenticatedRequest> {
    without_body(HttpMethod::Delete, url, token)
}

/// DELETE carrying a JSON payload (segment user removal needs one).
pub fn build_delete_with_body(
    url: &str,
    token: Option<&str>,
    payload: &(impl Serialize + ?Sized),
) -> Result<AuthenticatedRequest> {
    with_json(HttpMethod::Delete, url, token, payload)
}

/// Multipart POST with an optional file part followed by text fields.
pub fn build_multipart_upload(
    url: &str,
    token: Option<&str>,
    file: Option<UploadFile>,
    fields: &[(&str, &str)],
) -> Result<AuthenticatedRequest> {
    let auth = bearer(token)?;
    let mut parts = Vec::with_capacity(fields.len() + 1);
    if let Some(file) = file {
        parts.push(MultipartPart::File(file));
    }
    parts.extend(fields.iter().map(|(name, value)| MultipartPart::Text {
        name: (*name).to_string(),
        value: (*value).to_string(),
    }));
    Ok(AuthenticatedRequest {
        method: HttpMethod::Post,
        url: url.to_string(),
        headers: vec![
            auth,
            (CONTENT_TYPE.to_string(), MULTIPART_FORM_DATA.to_string()),
        ],
        body: Some(RequestBody::Multipart(parts)),
    })
}

/// Unauthenticated form POST, used only against the OAuth token endpoint.
pub fn build_form_post(url: &str, fields: &[(&str, &str)]) -> AuthenticatedRequest {
    AuthenticatedRequest {
        method: HttpMethod::Post,
        url: url.to_string(),
        headers: vec![(CONTENT_TYPE.to_string(), FORM_URLENCODED.to_string())],
        body: Some(RequestBody::Form(
            fields
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )),
    }
}
