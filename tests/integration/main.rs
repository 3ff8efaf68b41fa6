//! Integration tests against a mock HTTP server and an in-memory transport.

mod mock_server;
mod oauth;
mod recording;
mod resources;
mod scenarios;
mod validation;
