use super::core::SnapClient;
use crate::config::SdkConfig;
use crate::transport::{HttpTransport, Transport};
use crate::Result;
use std::sync::Arc;

/// Builder for [`SnapClient`].
///
/// Without an explicit configuration the builder reads `SNAPADS_*`
/// environment variables over the defaults. Without an explicit transport it
/// creates an [`HttpTransport`] from the configuration.
#[derive(Default)]
pub struct SnapClientBuilder {
    config: Option<SdkConfig>,
    access_token: Option<String>,
    transport: Option<Arc<dyn Transport>>,
    /// Override base URL (primarily for testing with mock servers)
    base_url_override: Option<String>,
}

impl SnapClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SdkConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Use a custom transport instead of the default HTTP one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<SnapClient> {
        let mut config = match self.config {
            Some(config) => config,
            None => SdkConfig::from_env()?,
        };
        if let Some(base_url) = self.base_url_override {
            config.base_url = base_url;
        }
        let config = config.validated()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(&config)?),
        };

        Ok(SnapClient {
            config: Arc::new(config),
            transport,
            access_token: self.access_token,
        })
    }
}
