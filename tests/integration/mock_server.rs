//! Mock HTTP server setup for integration tests

use mockito::{Mock, Server, ServerGuard};
use snapads_rust::{SdkConfig, SnapClient};

pub const TOKEN: &str = "test-token";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub fn new() -> Self {
        let server = Server::new();
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client over the real HTTP transport, pointed at the mock server.
    pub fn client(&self) -> SnapClient {
        self.client_with(SdkConfig::default())
    }

    pub fn client_with(&self, config: SdkConfig) -> SnapClient {
        SnapClient::builder()
            .config(config)
            .base_url(self.base_url.clone())
            .access_token(TOKEN)
            .build()
            .expect("client should build")
    }

    /// Authenticated endpoint answering with a JSON body.
    pub fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("authorization", format!("Bearer {}", TOKEN).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }
}
