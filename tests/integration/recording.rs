//! In-memory transport that records every request it is asked to execute.

use snapads_rust::transport::{AuthenticatedRequest, ResponseEnvelope, Transport, TransportError};
use snapads_rust::{SdkConfig, SnapClient};
use std::sync::{Arc, Mutex};

pub struct RecordingTransport {
    requests: Mutex<Vec<AuthenticatedRequest>>,
    reply: Result<ResponseEnvelope, String>,
}

impl RecordingTransport {
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(ResponseEnvelope::new(status, body)),
        })
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(reason.to_string()),
        })
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> AuthenticatedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

impl Transport for RecordingTransport {
    fn execute(
        &self,
        request: &AuthenticatedRequest,
    ) -> Result<ResponseEnvelope, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(TransportError::Other)
    }
}

pub fn client(transport: &Arc<RecordingTransport>, token: Option<&str>) -> SnapClient {
    let mut builder = SnapClient::builder()
        .config(SdkConfig::default())
        .transport(transport.clone());
    if let Some(token) = token {
        builder = builder.access_token(token);
    }
    builder.build().expect("client should build")
}
