use super::builder::SnapClientBuilder;
use super::endpoint;
use super::resource::ResourceClient;
use crate::auth::OAuthClient;
use crate::config::SdkConfig;
use crate::transport::{AuthenticatedRequest, ResponseEnvelope, Transport};
use crate::types::{
    Ad, AdAccount, AdSquad, AudienceSegment, Campaign, Creative, FundingSource, Media,
    Organization, Pixel,
};
use crate::{Error, Result};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Entry point of the SDK.
///
/// Holds the configuration, one shared transport and the caller's access
/// token. Nothing in here is mutated by a call, so a client can be used from
/// several threads at once and cloned cheaply.
#[derive(Clone)]
pub struct SnapClient {
    pub(crate) config: Arc<SdkConfig>,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) access_token: Option<String>,
}

impl fmt::Debug for SnapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapClient")
            .field("base_url", &self.config.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl SnapClient {
    pub fn builder() -> SnapClientBuilder {
        SnapClientBuilder::new()
    }

    /// Client with configuration from the environment and the given token.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Same configuration and transport, different token.
    pub fn with_access_token(&self, access_token: impl Into<String>) -> Self {
        Self {
            config: Arc::clone(&self.config),
            transport: Arc::clone(&self.transport),
            access_token: Some(access_token.into()),
        }
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub(crate) fn url(&self, template: &str, params: &[(&str, &str)]) -> String {
        endpoint::resolve(&self.config.base_url, template, params)
    }

    /// Execute a request and classify its status.
    ///
    /// Transport failures surface as [`Error::Execution`], statuses >= 300
    /// as [`Error::Response`]. Nothing is retried.
    pub fn execute(&self, request: &AuthenticatedRequest) -> Result<ResponseEnvelope> {
        let start = Instant::now();
        debug!(
            method = request.method.as_str(),
            endpoint = request.url.as_str(),
            "executing request"
        );

        let response = self.transport.execute(request).map_err(Error::from)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        match response.error_for_status() {
            Ok(response) => {
                debug!(
                    http_status = response.status,
                    endpoint = request.url.as_str(),
                    duration_ms,
                    "request succeeded"
                );
                Ok(response)
            }
            Err(err) => {
                if let Error::Response(resp) = &err {
                    info!(
                        http_status = resp.status,
                        kind = resp.kind.name(),
                        endpoint = request.url.as_str(),
                        duration_ms,
                        "request failed"
                    );
                }
                Err(err)
            }
        }
    }

    pub fn organizations(&self) -> ResourceClient<'_, Organization> {
        ResourceClient::new(self)
    }

    pub fn ad_accounts(&self) -> ResourceClient<'_, AdAccount> {
        ResourceClient::new(self)
    }

    pub fn campaigns(&self) -> ResourceClient<'_, Campaign> {
        ResourceClient::new(self)
    }

    pub fn ad_squads(&self) -> ResourceClient<'_, AdSquad> {
        ResourceClient::new(self)
    }

    pub fn ads(&self) -> ResourceClient<'_, Ad> {
        ResourceClient::new(self)
    }

    pub fn creatives(&self) -> ResourceClient<'_, Creative> {
        ResourceClient::new(self)
    }

    pub fn media(&self) -> ResourceClient<'_, Media> {
        ResourceClient::new(self)
    }

    pub fn funding_sources(&self) -> ResourceClient<'_, FundingSource> {
        ResourceClient::new(self)
    }

    pub fn pixels(&self) -> ResourceClient<'_, Pixel> {
        ResourceClient::new(self)
    }

    pub fn segments(&self) -> ResourceClient<'_, AudienceSegment> {
        ResourceClient::new(self)
    }

    /// OAuth helper bound to the credentials in the configuration.
    pub fn oauth(&self) -> Result<OAuthClient<'_>> {
        OAuthClient::new(self)
    }
}
